use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = activities)]
pub struct NewActivity<'a> {
    pub uid: &'a str,
    pub title: &'a str,
    pub date: String,
    pub description: &'a str,
    pub category: &'a str,
}

#[derive(Queryable)]
pub struct ActivityEntity {
    pub id: i64,
    pub uid: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub category: String,
}
