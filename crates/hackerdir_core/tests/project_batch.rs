use hackerdir_core::db::open_db_in_memory;
use hackerdir_core::{
    NewProject, ProjectListQuery, ProjectRepository, ProjectService, RepoError, ServiceError,
    SqliteProjectRepository, ValidationError,
};
use rusqlite::Connection;
use uuid::Uuid;

fn row(creator: &str, hacker_id: Option<Uuid>) -> NewProject {
    NewProject {
        title: "hackerdir".to_string(),
        creator: creator.to_string(),
        description: "Directory of Berkeley hackers".to_string(),
        url: "https://github.com/hab/hackerdir".to_string(),
        hacker_id,
    }
}

fn count_projects(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM projects;", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn batch_insert_returns_rows_in_input_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    let linked = Uuid::new_v4();

    let created = repo
        .create_projects(&[row("Morgan Lee", Some(linked)), row("Guest", None)])
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].creator, "Morgan Lee");
    assert_eq!(created[0].hacker_id, Some(linked));
    assert_eq!(created[1].creator, "Guest");
    assert_eq!(created[1].hacker_id, None);
    assert_ne!(created[0].id, created[1].id);
    assert!(created.iter().all(|project| project.created_at > 0));
}

#[test]
fn failing_row_rolls_back_whole_batch() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_boom BEFORE INSERT ON projects
         WHEN NEW.creator = 'boom'
         BEGIN
             SELECT RAISE(ABORT, 'rejected creator');
         END;",
    )
    .unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let err = repo
        .create_projects(&[row("first", None), row("boom", None), row("third", None)])
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(count_projects(&conn), 0);

    repo.create_projects(&[row("first", None)]).unwrap();
    assert_eq!(count_projects(&conn), 1);
}

#[test]
fn invalid_row_blocks_batch_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let err = repo
        .create_projects(&[row("ok", None), row("   ", None)])
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::BlankCreator)
    ));
    assert_eq!(count_projects(&conn), 0);
}

#[test]
fn list_filters_by_hacker_and_orders_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    let hacker = Uuid::new_v4();

    repo.create_projects(&[row("A", Some(hacker))]).unwrap();
    repo.create_projects(&[row("B", Some(hacker))]).unwrap();
    repo.create_projects(&[row("C", None)]).unwrap();

    let listed = repo
        .list_projects(&ProjectListQuery::for_person(hacker))
        .unwrap();
    let creators: Vec<&str> = listed.iter().map(|p| p.creator.as_str()).collect();
    assert_eq!(creators, vec!["B", "A"]);

    let limited = repo
        .list_projects(&ProjectListQuery {
            limit: Some(1),
            ..ProjectListQuery::default()
        })
        .unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].creator, "C");
}

#[test]
fn rapid_batches_list_in_write_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    for index in 0..10 {
        repo.create_projects(&[row(&format!("c{index}"), None)])
            .unwrap();
    }

    let listed = repo.list_projects(&ProjectListQuery::default()).unwrap();
    let creators: Vec<&str> = listed.iter().map(|p| p.creator.as_str()).collect();
    let expected: Vec<String> = (0..10).rev().map(|index| format!("c{index}")).collect();
    assert_eq!(creators, expected);
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].created_at > pair[1].created_at));
}

#[test]
fn fan_out_batch_keeps_input_order_and_shares_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    let linked = Uuid::new_v4();

    repo.create_projects(&[row("earlier", None)]).unwrap();
    let batch = repo
        .create_projects(&[
            row("Morgan Lee", Some(linked)),
            row("Guest", None),
            row("Another Guest", None),
        ])
        .unwrap();
    assert!(batch.iter().all(|p| p.created_at == batch[0].created_at));

    let listed = repo.list_projects(&ProjectListQuery::default()).unwrap();
    let creators: Vec<&str> = listed.iter().map(|p| p.creator.as_str()).collect();
    assert_eq!(
        creators,
        vec!["Morgan Lee", "Guest", "Another Guest", "earlier"]
    );
}

#[test]
fn stored_timestamps_are_epoch_milliseconds() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    let before = chrono::Utc::now().timestamp_millis();

    let created = repo.create_projects(&[row("A", None)]).unwrap();

    let after = chrono::Utc::now().timestamp_millis();
    assert!(created[0].created_at >= before - 1);
    assert!(created[0].created_at <= after + 1);
}

#[test]
fn delete_project_removes_one_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();

    let created = repo
        .create_projects(&[row("A", None), row("B", None)])
        .unwrap();
    repo.delete_project(created[0].id).unwrap();
    assert_eq!(count_projects(&conn), 1);

    let err = repo.delete_project(created[0].id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn service_rejects_empty_submission() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let err = service.add_projects(&[]).unwrap_err();
    assert!(matches!(err, ServiceError::EmptyBatch));
}
