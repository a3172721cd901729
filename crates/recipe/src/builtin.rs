use fridgekit_shared::CookingLevel;

use crate::Recipe;

pub struct BuiltinRecipe {
    pub level: CookingLevel,
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
}

impl BuiltinRecipe {
    pub fn to_recipe(&self) -> Recipe {
        Recipe {
            name: self.name.to_owned(),
            level: self.level,
            ingredients: self.ingredients.iter().map(|s| (*s).to_owned()).collect(),
            steps: vec![],
        }
    }
}

pub const BUILTIN_RECIPES: &[BuiltinRecipe] = &[
    BuiltinRecipe {
        level: CookingLevel::Beginner,
        name: "Fried Eggs",
        ingredients: &["egg", "salt", "pepper"],
    },
    BuiltinRecipe {
        level: CookingLevel::Beginner,
        name: "Butter Toast",
        ingredients: &["bread", "butter"],
    },
    BuiltinRecipe {
        level: CookingLevel::Beginner,
        name: "Cereal",
        ingredients: &["cereal", "milk"],
    },
    BuiltinRecipe {
        level: CookingLevel::Beginner,
        name: "Peanut Butter Sandwich",
        ingredients: &["bread", "peanut butter"],
    },
    BuiltinRecipe {
        level: CookingLevel::Intermediate,
        name: "French Toast",
        ingredients: &["bread", "egg", "milk", "sugar"],
    },
    BuiltinRecipe {
        level: CookingLevel::Intermediate,
        name: "Pancakes",
        ingredients: &["flour", "egg", "milk", "baking powder"],
    },
    BuiltinRecipe {
        level: CookingLevel::Intermediate,
        name: "Garlic Noodles",
        ingredients: &["noodles", "garlic", "butter", "soy sauce"],
    },
    BuiltinRecipe {
        level: CookingLevel::Advanced,
        name: "Omelette",
        ingredients: &["egg", "cheese", "salt", "pepper"],
    },
    BuiltinRecipe {
        level: CookingLevel::Advanced,
        name: "Chicken Stir-Fry",
        ingredients: &["chicken", "vegetables", "soy sauce", "garlic"],
    },
    BuiltinRecipe {
        level: CookingLevel::Advanced,
        name: "Tomato Pasta",
        ingredients: &["pasta", "tomato", "garlic", "olive oil"],
    },
];

const BUILTIN_STEPS: &[(&str, &[&str])] = &[
    (
        "Fried Eggs",
        &[
            "Heat a pan over medium heat.",
            "Add a little oil or butter.",
            "Crack the egg into the pan.",
            "Cook until whites set and yolk is done to your liking.",
            "Season with salt and pepper.",
        ],
    ),
    (
        "Butter Toast",
        &[
            "Toast bread to your preferred level.",
            "Spread butter evenly on the toast.",
            "Serve warm.",
        ],
    ),
    (
        "Cereal",
        &[
            "Pour cereal into a bowl.",
            "Add cold milk.",
            "Enjoy immediately.",
        ],
    ),
    (
        "Peanut Butter Sandwich",
        &[
            "Spread peanut butter on one slice of bread.",
            "Top with the second slice.",
            "Cut and serve.",
        ],
    ),
    (
        "French Toast",
        &[
            "Whisk egg, milk, and a bit of sugar in a shallow bowl.",
            "Dip both sides of bread into the mixture.",
            "Cook on a buttered pan over medium heat until golden on both sides.",
            "Serve with syrup or fruit.",
        ],
    ),
    (
        "Pancakes",
        &[
            "Mix flour, baking powder, milk, and egg into a smooth batter.",
            "Heat a pan over medium heat and lightly oil it.",
            "Pour batter to form pancakes; cook until bubbles form, then flip.",
            "Cook until golden and serve.",
        ],
    ),
    (
        "Garlic Noodles",
        &[
            "Boil noodles according to package directions; drain.",
            "Melt butter in a pan; add minced garlic and cook briefly.",
            "Toss noodles with the garlic butter and soy sauce.",
            "Serve warm.",
        ],
    ),
    (
        "Omelette",
        &[
            "Beat eggs with a pinch of salt and pepper.",
            "Pour into a hot, lightly oiled pan.",
            "When nearly set, add fillings like cheese.",
            "Fold and finish cooking.",
        ],
    ),
    (
        "Chicken Stir-Fry",
        &[
            "Slice chicken and vegetables.",
            "Stir-fry chicken in a hot pan with oil until cooked through.",
            "Add vegetables and garlic; stir-fry until tender-crisp.",
            "Finish with soy sauce; toss and serve.",
        ],
    ),
    (
        "Tomato Pasta",
        &[
            "Cook pasta until al dente; reserve some pasta water.",
            "Sauté garlic in olive oil; add chopped tomato and simmer.",
            "Toss in pasta with a splash of pasta water.",
            "Season and serve.",
        ],
    ),
];

pub const NO_STEPS_PLACEHOLDER: &str = "No steps available.";

/// Instruction steps of a built-in recipe, looked up by exact name.
pub fn builtin_steps(name: &str) -> Option<&'static [&'static str]> {
    BUILTIN_STEPS
        .iter()
        .find(|(recipe, _)| *recipe == name)
        .map(|(_, steps)| *steps)
}

/// Authored steps, else the built-in instructions, else a placeholder.
pub fn resolve_steps(recipe: &Recipe) -> Vec<String> {
    if !recipe.steps.is_empty() {
        return recipe.steps.clone();
    }

    match builtin_steps(&recipe.name) {
        Some(steps) => steps.iter().map(|s| (*s).to_owned()).collect(),
        None => vec![NO_STEPS_PLACEHOLDER.to_owned()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_has_steps() {
        for recipe in BUILTIN_RECIPES {
            assert!(builtin_steps(recipe.name).is_some(), "{}", recipe.name);
        }
    }

    #[test]
    fn test_resolve_steps_fallbacks() {
        let mut recipe = BUILTIN_RECIPES[1].to_recipe();
        assert_eq!(resolve_steps(&recipe)[0], "Toast bread to your preferred level.");

        recipe.steps = vec!["Just eat it.".to_owned()];
        assert_eq!(resolve_steps(&recipe), vec!["Just eat it."]);

        recipe.name = "Mystery Stew".to_owned();
        recipe.steps.clear();
        assert_eq!(resolve_steps(&recipe), vec![NO_STEPS_PLACEHOLDER]);
    }
}
