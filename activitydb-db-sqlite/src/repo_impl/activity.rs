use super::*;

impl ActivityRepo for DbReadOnly<'_> {
    fn create_activity(&self, _activity: Activity) -> Result<()> {
        unreachable!();
    }
    fn update_activity(&self, _activity: &Activity) -> Result<()> {
        unreachable!();
    }

    fn get_activity(&self, id: &str) -> Result<Activity> {
        get_activity(&mut self.conn(), id)
    }
    fn all_activities(&self) -> Result<Vec<Activity>> {
        all_activities(&mut self.conn())
    }
    fn count_activities(&self) -> Result<usize> {
        count_activities(&mut self.conn())
    }
}

impl ActivityRepo for DbReadWrite<'_> {
    fn create_activity(&self, activity: Activity) -> Result<()> {
        create_activity(&mut self.conn(), activity)
    }
    fn update_activity(&self, activity: &Activity) -> Result<()> {
        update_activity(&mut self.conn(), activity)
    }

    fn get_activity(&self, id: &str) -> Result<Activity> {
        get_activity(&mut self.conn(), id)
    }
    fn all_activities(&self) -> Result<Vec<Activity>> {
        all_activities(&mut self.conn())
    }
    fn count_activities(&self) -> Result<usize> {
        count_activities(&mut self.conn())
    }
}

fn new_activity(activity: &Activity) -> models::NewActivity<'_> {
    let Activity {
        id,
        title,
        date,
        description,
        category,
    } = activity;
    models::NewActivity {
        uid: id.as_str(),
        title,
        date: date.to_string(),
        description,
        category: category.as_str(),
    }
}

fn load_activity(entity: models::ActivityEntity) -> Result<Activity> {
    let models::ActivityEntity {
        id: _,
        uid,
        title,
        date,
        description,
        category,
    } = entity;
    Ok(Activity {
        id: uid.into(),
        title,
        date: load_activity_date(&date)?,
        description,
        category: category.into(),
    })
}

fn create_activity(conn: &mut SqliteConnection, activity: Activity) -> Result<()> {
    diesel::insert_into(schema::activities::table)
        .values(&new_activity(&activity))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_activity(conn: &mut SqliteConnection, activity: &Activity) -> Result<()> {
    use schema::activities::dsl;
    let count = diesel::update(dsl::activities.filter(dsl::uid.eq(activity.id.as_str())))
        .set(&new_activity(activity))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_activity(conn: &mut SqliteConnection, id: &str) -> Result<Activity> {
    use schema::activities::dsl;
    let entity = dsl::activities
        .filter(dsl::uid.eq(id))
        .first::<models::ActivityEntity>(conn)
        .map_err(from_diesel_err)?;
    load_activity(entity)
}

fn all_activities(conn: &mut SqliteConnection) -> Result<Vec<Activity>> {
    use schema::activities::dsl;
    dsl::activities
        .order_by(dsl::id)
        .load::<models::ActivityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_activity)
        .collect()
}

fn count_activities(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::activities::dsl;
    Ok(dsl::activities
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
