use fridgekit_shared::Store;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_edit_and_delete_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = fridgekit_shopping::Command::new(state);

    let list = cmd.create_list("Market").await?;
    let item = cmd.add_item(&list.id, "Tomatos").await?.unwrap();

    let edited = cmd
        .edit_item(&list.id, &item.id, " Tomatoes ")
        .await?
        .unwrap();
    assert_eq!(edited.name, "Tomatoes");
    assert_eq!(edited.added_at, item.added_at);

    assert!(cmd.edit_item(&list.id, "missing", "x").await?.is_none());
    assert!(!cmd.delete_item(&list.id, "missing").await?);
    assert!(cmd.delete_item(&list.id, &item.id).await?);
    assert!(cmd.find_list(&list.id).await?.unwrap().items.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_overview_and_detail_ordering() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = fridgekit_shopping::Command::new(state);

    let first = cmd.create_list("First").await?;
    let second = cmd.create_list("Second").await?;
    cmd.add_item(&first.id, "Apples").await?;
    cmd.add_item(&first.id, "Pears").await?;

    let overview = cmd.overview().await?;
    assert_eq!(overview.count_text, "You have 2 shopping lists");
    assert_eq!(overview.lists[0].id, second.id);
    assert_eq!(overview.lists[1].badge, "2 items");
    assert_eq!(overview.lists[0].badge, "0 items");

    let detail = cmd.detail(&first.id).await?.unwrap();
    assert_eq!(detail.count_text, "This list has 2 items");
    let names = detail.items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Pears", "Apples"]);

    Ok(())
}

#[tokio::test]
async fn test_legacy_crossed_names_migrated_on_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    state
        .store
        .set(
            fridgekit_shopping::SHOPPING_KEY,
            r#"[{"id":"l1","name":"Old","createdAt":1,"items":[
                {"id":"i1","name":"Milk***","addedAt":2},
                {"id":"i2","name":"Bread","addedAt":3}
            ]}]"#,
        )
        .await?;
    let cmd = fridgekit_shopping::Command::new(state);

    let list = cmd.find_list("l1").await?.unwrap();
    let milk = list.item("i1").unwrap();
    assert_eq!(milk.name, "Milk");
    assert!(milk.crossed);
    assert!(!list.item("i2").unwrap().crossed);

    // Toggling rewrites the list with explicit flags.
    assert_eq!(cmd.toggle_item("l1", "i2").await?, Some(true));
    let list = cmd.find_list("l1").await?.unwrap();
    assert!(list.item("i1").unwrap().crossed);
    assert!(list.item("i2").unwrap().crossed);

    Ok(())
}
