use crate::greeting;
use migration::MigratorTrait;
use anyhow::Result;

use super::test_db;

#[tokio::test]
async fn greeting_create_find_list() -> Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };
    migration::Migrator::up(&db, None).await?;

    let a = greeting::create(&db, "Hello Ada").await?;
    let b = greeting::create(&db, "").await?;
    assert!(b.id > a.id);
    assert_eq!(b.message, "");

    let found = greeting::find(&db, a.id).await?.expect("row exists");
    assert_eq!(found, a);

    let all = greeting::list(&db).await?;
    let pos_a = all.iter().position(|g| g.id == a.id).expect("a listed");
    let pos_b = all.iter().position(|g| g.id == b.id).expect("b listed");
    assert!(pos_a < pos_b);

    assert!(greeting::find(&db, -1).await?.is_none());
    Ok(())
}
