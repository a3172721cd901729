use fridgekit_shared::{CookingLevel, Store};
use strum::VariantArray;

use crate::{BUILTIN_RECIPES, Recipe, resolve_steps};

pub struct Catalog {
    pub count_text: String,
    pub groups: Vec<LevelGroup>,
}

impl Catalog {
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries().any(|entry| entry.recipe.name == name)
    }
}

pub struct LevelGroup {
    pub level: CookingLevel,
    pub title: &'static str,
    pub entries: Vec<CatalogEntry>,
}

pub struct CatalogEntry {
    pub recipe: Recipe,
    /// Only user-authored recipes can be edited or deleted.
    pub editable: bool,
}

pub fn included_levels(level: CookingLevel, show_all: bool) -> Vec<CookingLevel> {
    if show_all {
        return CookingLevel::VARIANTS.to_vec();
    }

    level.at_or_below()
}

pub fn count_text(count: usize) -> String {
    if count == 1 {
        "1 recipe".to_owned()
    } else {
        format!("{count} recipes")
    }
}

/// Groups built-ins followed by user recipes by ascending level, keeping
/// only the included levels. Empty groups are omitted.
pub fn group_recipes(
    user: Vec<Recipe>,
    levels: &[CookingLevel],
) -> Vec<LevelGroup> {
    let builtins = BUILTIN_RECIPES.iter().map(|b| CatalogEntry {
        recipe: b.to_recipe(),
        editable: false,
    });
    let authored = user.into_iter().map(|recipe| CatalogEntry {
        recipe,
        editable: true,
    });
    let mut entries = builtins.chain(authored).collect::<Vec<_>>();

    let mut groups = Vec::new();
    for level in CookingLevel::VARIANTS {
        if !levels.contains(level) {
            continue;
        }

        let (matching, rest) = entries
            .into_iter()
            .partition::<Vec<_>, _>(|entry| entry.recipe.level == *level);
        entries = rest;

        if !matching.is_empty() {
            groups.push(LevelGroup {
                level: *level,
                title: level.title(),
                entries: matching,
            });
        }
    }

    groups
}

impl<S: Store> crate::Command<S> {
    /// Catalog filtered by the stored cooking level, or every level when
    /// `show_all` is set.
    pub async fn browse(&self, show_all: bool) -> fridgekit_shared::Result<Catalog> {
        let level = self.default_level().await?;
        let levels = included_levels(level, show_all);
        let groups = group_recipes(self.user_recipes().await?, &levels);
        let count = groups.iter().map(|g| g.entries.len()).sum();

        Ok(Catalog {
            count_text: count_text(count),
            groups,
        })
    }

    /// Preselected level for a new recipe form.
    pub async fn default_level(&self) -> fridgekit_shared::Result<CookingLevel> {
        Ok(fridgekit_settings::load(&self.store).await?.cooking_level)
    }

    /// Looks a recipe up by name, user-authored first, then built-in.
    pub async fn find(&self, name: &str) -> fridgekit_shared::Result<Option<Recipe>> {
        if let Some(recipe) = self.find_user_recipe(name).await? {
            return Ok(Some(recipe));
        }

        Ok(BUILTIN_RECIPES
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.to_recipe()))
    }

    /// Steps to display for `name`; `None` when no recipe has that name.
    pub async fn steps_for(&self, name: &str) -> fridgekit_shared::Result<Option<Vec<String>>> {
        Ok(self.find(name).await?.map(|recipe| resolve_steps(&recipe)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, level: CookingLevel) -> Recipe {
        Recipe {
            name: name.to_owned(),
            level,
            ingredients: vec!["water".to_owned()],
            steps: vec!["Boil.".to_owned()],
        }
    }

    #[test]
    fn test_included_levels() {
        assert_eq!(
            included_levels(CookingLevel::Beginner, false),
            vec![CookingLevel::Beginner]
        );
        assert_eq!(
            included_levels(CookingLevel::Intermediate, false),
            vec![CookingLevel::Beginner, CookingLevel::Intermediate]
        );
        assert_eq!(included_levels(CookingLevel::Beginner, true).len(), 3);
    }

    #[test]
    fn test_group_recipes_ascending_and_filtered() {
        let groups = group_recipes(
            vec![
                user("Soup", CookingLevel::Advanced),
                user("Tea", CookingLevel::Beginner),
            ],
            &[CookingLevel::Beginner, CookingLevel::Advanced],
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].level, CookingLevel::Beginner);
        assert_eq!(groups[0].title, "Beginner");
        assert_eq!(groups[0].entries.len(), 5);
        let tea = groups[0].entries.last().unwrap();
        assert_eq!(tea.recipe.name, "Tea");
        assert!(tea.editable);
        assert!(!groups[0].entries[0].editable);

        assert_eq!(groups[1].level, CookingLevel::Advanced);
        assert!(groups[1].entries.iter().any(|e| e.recipe.name == "Soup"));
    }

    #[test]
    fn test_count_text() {
        assert_eq!(count_text(1), "1 recipe");
        assert_eq!(count_text(0), "0 recipes");
        assert_eq!(count_text(12), "12 recipes");
    }
}
