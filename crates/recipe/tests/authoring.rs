use fridgekit_recipe::{RecipeInput, USER_RECIPES_KEY};
use fridgekit_shared::{CookingLevel, Error, Store};
use temp_dir::TempDir;

mod helpers;

fn input(name: &str, ingredients: &str, steps: &str) -> RecipeInput {
    RecipeInput {
        name: name.to_owned(),
        level: CookingLevel::Beginner,
        ingredients: ingredients.to_owned(),
        steps: steps.to_owned(),
    }
}

#[tokio::test]
async fn test_add_edit_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = fridgekit_recipe::Command::new(state.clone());

    let added = cmd
        .add(input("  Tea ", "water, tea bag, ", "Boil water\n\nSteep 3 minutes\n"))
        .await?;
    assert_eq!(added.name, "Tea");
    assert_eq!(added.ingredients, vec!["water", "tea bag"]);
    assert_eq!(added.steps, vec!["Boil water", "Steep 3 minutes"]);

    let reloaded = fridgekit_recipe::Command::new(state.clone());
    assert_eq!(reloaded.user_recipes().await?, vec![added]);

    let edited = reloaded
        .edit("Tea", input("Green Tea", "water, green tea", "Steep 2 minutes"))
        .await?
        .unwrap();
    assert_eq!(edited.name, "Green Tea");
    assert!(reloaded.find_user_recipe("Tea").await?.is_none());
    assert_eq!(reloaded.find("Green Tea").await?, Some(edited));

    assert!(reloaded.delete("Green Tea").await?);
    assert!(!reloaded.delete("Green Tea").await?);
    assert!(reloaded.user_recipes().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_add_requires_name_ingredients_and_steps() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = fridgekit_recipe::Command::new(state);

    for bad in [
        input("   ", "water", "Boil"),
        input("Tea", " , ", "Boil"),
        input("Tea", "water", "\n  \n"),
    ] {
        let err = cmd.add(bad).await.unwrap_err();
        assert!(matches!(err, Error::Validate(_)));
    }
    assert!(cmd.user_recipes().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_duplicate_names_touch_first_match_only() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = fridgekit_recipe::Command::new(state);

    cmd.add(input("Tea", "water", "Boil")).await?;
    cmd.add(input("Tea", "water, milk", "Boil\nAdd milk")).await?;

    cmd.edit("Tea", input("Black Tea", "water", "Boil longer")).await?;
    let names = cmd
        .user_recipes()
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Black Tea", "Tea"]);

    assert!(cmd.delete("Tea").await?);
    assert_eq!(cmd.user_recipes().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_corrupted_overlay_reads_as_empty() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    state.store.set(USER_RECIPES_KEY, "{not json").await?;

    let cmd = fridgekit_recipe::Command::new(state);
    assert!(cmd.user_recipes().await?.is_empty());
    assert_eq!(cmd.browse(false).await?.count_text, "4 recipes");

    cmd.add(input("Tea", "water", "Boil")).await?;
    assert_eq!(cmd.user_recipes().await?.len(), 1);

    Ok(())
}
