use std::slice::Iter;

/// A postural exercise of the built-in catalog.
///
/// The catalog is fixed at compile time and read-only for the lifetime of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub duration: &'static str,
    pub bookmarked: bool,
    pub category: Category,
}

impl Exercise {
    /// Whether the query is a substring of the name, the description or any
    /// tag, ignoring case. The query is not trimmed, the empty query matches
    /// every exercise.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Principiante",
            Difficulty::Intermediate => "Intermedio",
            Difficulty::Advanced => "Avanzado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Standing,
    Kneeling,
    Supine,
}

impl Category {
    pub fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 3] =
            [Category::Standing, Category::Kneeling, Category::Supine];
        CATEGORY.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Standing => "De pie",
            Category::Kneeling => "De rodillas",
            Category::Supine => "Supino",
        }
    }
}

pub static EXERCISES: [Exercise; 3] = [
    Exercise {
        id: "1",
        name: "Venus",
        description: "Postura fundamental de pie para la apertura inicial de \
                      la caja torácica y alineación.",
        difficulty: Difficulty::Beginner,
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?auto=format&fit=crop&q=80&w=800",
        tags: &["Enfoque en Diafragma"],
        duration: "5-10 min",
        bookmarked: true,
        category: Category::Standing,
    },
    Exercise {
        id: "2",
        name: "Maya",
        description: "Posición de rodillas centrada en la estabilidad del \
                      tronco y activación profunda del suelo pélvico.",
        difficulty: Difficulty::Intermediate,
        image_url: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?auto=format&fit=crop&q=80&w=800",
        tags: &["Suelo Pélvico"],
        duration: "12 min",
        bookmarked: false,
        category: Category::Kneeling,
    },
    Exercise {
        id: "3",
        name: "Hestia",
        description: "Postura sentada que requiere un alto control del \
                      transverso abdominal y el serrato anterior.",
        difficulty: Difficulty::Advanced,
        image_url: "https://images.unsplash.com/photo-1599447421416-3414500d18a5?auto=format&fit=crop&q=80&w=800",
        tags: &["Serrato/Core"],
        duration: "15 min",
        bookmarked: false,
        category: Category::Supine,
    },
];

/// Selection over the catalog. The text query and the category restriction
/// are conjunctive, `category: None` means all categories.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub query: String,
    pub category: Option<Category>,
}

impl ExerciseFilter {
    /// Matching exercises in catalog order.
    #[must_use]
    pub fn exercises(&self) -> Vec<&'static Exercise> {
        EXERCISES
            .iter()
            .filter(|e| {
                e.matches(&self.query) && self.category.is_none_or(|c| e.category == c)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn names(exercises: &[&'static Exercise]) -> Vec<&'static str> {
        exercises.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids = HashSet::new();

        for exercise in &EXERCISES {
            assert!(!exercise.id.is_empty());
            assert!(!ids.contains(exercise.id));

            ids.insert(exercise.id);
        }
    }

    #[test]
    fn test_difficulty_name() {
        let mut names = HashSet::new();

        for difficulty in Difficulty::iter() {
            let name = difficulty.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_category_name() {
        let mut names = HashSet::new();

        for category in Category::iter() {
            let name = category.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_empty_query_returns_catalog_in_order() {
        assert_eq!(
            names(&ExerciseFilter::default().exercises()),
            vec!["Venus", "Maya", "Hestia"]
        );
    }

    #[rstest]
    #[case::name_lower_case("venus", &["Venus"])]
    #[case::name_upper_case("VENUS", &["Venus"])]
    #[case::name_mixed_case("Venus", &["Venus"])]
    #[case::description("pélvico", &["Maya"])]
    #[case::description_upper_case("PÉLVICO", &["Maya"])]
    #[case::tag_only("core", &["Hestia"])]
    #[case::tag_only_diaphragm("diafragma", &["Venus"])]
    #[case::whitespace_is_literal(" ", &["Venus", "Maya", "Hestia"])]
    #[case::no_match("zzz-no-match", &[])]
    fn test_exercise_filter_query(#[case] query: &str, #[case] expected: &[&str]) {
        assert_eq!(
            names(
                &ExerciseFilter {
                    query: query.into(),
                    ..ExerciseFilter::default()
                }
                .exercises()
            ),
            expected
        );
    }

    #[rstest]
    #[case::all(None, "", &["Venus", "Maya", "Hestia"])]
    #[case::standing(Some(Category::Standing), "", &["Venus"])]
    #[case::kneeling(Some(Category::Kneeling), "", &["Maya"])]
    #[case::supine(Some(Category::Supine), "", &["Hestia"])]
    #[case::conjunctive(Some(Category::Kneeling), "pélvico", &["Maya"])]
    #[case::conjunctive_no_match(Some(Category::Standing), "pélvico", &[])]
    fn test_exercise_filter_category(
        #[case] category: Option<Category>,
        #[case] query: &str,
        #[case] expected: &[&str],
    ) {
        assert_eq!(
            names(
                &ExerciseFilter {
                    query: query.into(),
                    category,
                }
                .exercises()
            ),
            expected
        );
    }
}
