use uuid::Uuid;

/// A record keyed by a string id.
pub trait Entity {
    fn id(&self) -> &str;
}

/// A record that belongs to one school (tenant).
pub trait SchoolScoped: Entity {
    fn school_id(&self) -> &str;
}

/// Records of `items` that belong to `school_id`.
pub fn for_school<'a, T: SchoolScoped>(items: &'a [T], school_id: &str) -> Vec<&'a T> {
    items.iter().filter(|i| i.school_id() == school_id).collect()
}

/// Id for a record created in the browser, e.g. `"tkt-3f2a9c1e"`.
pub fn new_local_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &uuid[..8])
}

/// Implements [`Entity`] and [`SchoolScoped`] for structs with `id` and
/// `school_id` string fields.
macro_rules! school_scoped_entity {
    ($ty:ty) => {
        impl $crate::domain::common::Entity for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        }

        impl $crate::domain::common::SchoolScoped for $ty {
            fn school_id(&self) -> &str {
                &self.school_id
            }
        }
    };
}

pub(crate) use school_scoped_entity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ids_are_prefixed_and_distinct() {
        let a = new_local_id("tkt");
        let b = new_local_id("tkt");
        assert!(a.starts_with("tkt-"));
        assert_eq!(a.len(), "tkt-".len() + 8);
        assert_ne!(a, b);
    }
}
