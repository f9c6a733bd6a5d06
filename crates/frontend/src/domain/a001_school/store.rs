use contracts::domain::a001_school::SchoolDirectory;
use contracts::fixtures;
use leptos::prelude::*;

/// Provides the school directory, seeded from the demo fixtures.
#[component]
pub fn SchoolDirectoryProvider(children: Children) -> impl IntoView {
    let directory = RwSignal::new(SchoolDirectory::new(fixtures::schools()));
    provide_context(directory);

    children()
}

pub fn use_schools() -> RwSignal<SchoolDirectory> {
    use_context::<RwSignal<SchoolDirectory>>()
        .expect("SchoolDirectoryProvider not found in component tree")
}

/// Display name of a school in the current directory, or the raw id.
pub fn school_name(school_id: &str) -> String {
    use_schools().with(|dir| {
        dir.get_school_by_id(school_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| school_id.to_string())
    })
}
