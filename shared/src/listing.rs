use crate::entity::EntityKind;

/// What a list region renders: a placeholder or the cards in received order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Empty(String),
    Items(Vec<T>),
}

/// An absent list and an empty one both show the placeholder.
pub fn listing<T>(items: Option<Vec<T>>, kind: EntityKind) -> Listing<T> {
    match items {
        Some(items) if !items.is_empty() => Listing::Items(items),
        _ => Listing::Empty(empty_label(kind)),
    }
}

pub fn empty_label(kind: EntityKind) -> String {
    format!("No {} available.", kind.plural())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Topic;

    fn topic(id: i64, title: &str) -> Topic {
        Topic {
            topic_id: id,
            title: title.to_owned(),
            user_id: 1,
            created_at: "2025-01-01T00:00:00Z".to_owned(),
        }
    }

    #[test]
    fn empty_topic_list_shows_placeholder() {
        let view = listing::<Topic>(Some(Vec::new()), EntityKind::Topic);
        match view {
            Listing::Empty(label) => assert!(label.contains("No topic")),
            Listing::Items(_) => panic!("expected placeholder"),
        }
    }

    #[test]
    fn absent_list_shows_placeholder() {
        let view = listing::<Topic>(None, EntityKind::Comment);
        assert_eq!(view, Listing::Empty("No comments available.".to_owned()));
    }

    #[test]
    fn items_keep_received_order() {
        let topics = vec![topic(3, "food"), topic(1, "tech"), topic(2, "business")];
        let Listing::Items(items) = listing(Some(topics.clone()), EntityKind::Topic) else {
            panic!("expected items");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items, topics);
    }
}
