//! Property tests for the project gallery filter.

use proptest::prelude::*;

use folio::models::Project;
use folio::projects::{categories, filter_projects, ALL_CATEGORIES};

fn project(id: u32, category: String) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        description: String::new(),
        long_description: String::new(),
        image: None,
        tags: Vec::new(),
        category,
        github: String::new(),
        demo: String::new(),
        featured: false,
    }
}

fn projects() -> impl Strategy<Value = Vec<Project>> {
    proptest::collection::vec(prop::sample::select(vec!["Frontend", "Backend", "backend", "Full-Stack"]), 0..12)
        .prop_map(|cats| {
            cats.into_iter()
                .enumerate()
                .map(|(i, c)| project(i as u32 + 1, c.to_string()))
                .collect()
        })
}

proptest! {
    /// PROPERTY: "All" keeps every project in its original order.
    #[test]
    fn property_all_keeps_everything(list in projects()) {
        let all = filter_projects(&list, ALL_CATEGORIES);
        prop_assert_eq!(all.len(), list.len());
        for (a, b) in all.iter().zip(list.iter()) {
            prop_assert_eq!(a.id, b.id);
        }
    }

    /// PROPERTY: a category filter keeps exactly the projects of that category.
    #[test]
    fn property_filter_is_exact_subset(list in projects(), pick in 0usize..4) {
        let category = ["Frontend", "Backend", "backend", "Missing"][pick];
        let filtered = filter_projects(&list, category);
        prop_assert!(filtered.iter().all(|p| p.category == category));
        prop_assert_eq!(filtered.len(), list.iter().filter(|p| p.category == category).count());
    }

    /// PROPERTY: categories start with "All" and never repeat.
    #[test]
    fn property_categories_unique(list in projects()) {
        let cats = categories(&list);
        prop_assert_eq!(cats[0].as_str(), ALL_CATEGORIES);
        let mut seen = std::collections::HashSet::new();
        for c in &cats {
            prop_assert!(seen.insert(c.clone()), "duplicate category {}", c);
        }
        for p in &list {
            prop_assert!(cats.contains(&p.category));
        }
    }
}
