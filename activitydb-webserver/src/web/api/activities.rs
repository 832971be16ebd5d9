use super::*;

#[get("/activities")]
pub fn get_activities(db: sqlite::Connections) -> Result<Vec<json::Activity>> {
    let activities = usecases::list_activities(&db.shared()?)?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

#[get("/activities/<id>")]
pub fn get_activity(db: sqlite::Connections, id: &str) -> Result<json::Activity> {
    let activity = usecases::get_activity(&db.shared()?, id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(activity.into()))
}

#[put("/activities/<id>", format = "application/json", data = "<update>")]
pub fn put_activity(
    db: sqlite::Connections,
    id: &str,
    update: JsonResult<json::UpdateActivity>,
) -> Result<json::Activity> {
    let update = from_json::update_activity(update?.into_inner());
    let activity =
        usecases::update_activity(&db.exclusive()?, id, update)?.ok_or(ApiError::NotFound)?;
    info!("Updated activity {}", activity.id);
    Ok(Json(activity.into()))
}
