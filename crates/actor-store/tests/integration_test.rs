use actor_store::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

/// A shelf slot keyed by its label; holds a list of items.
#[derive(Clone, Debug, PartialEq)]
struct Slot {
    label: String,
    items: Vec<String>,
    locked: bool,
}

#[derive(Debug)]
struct SlotCreate {
    label: String,
}

#[derive(Debug)]
enum SlotAction {
    Put(Vec<String>),
    Lock,
}

#[derive(Debug)]
enum SlotQuery {
    Locked,
    All,
}

#[derive(Debug, thiserror::Error)]
enum SlotError {
    #[error("slot is locked")]
    Locked,
    #[error("item {0} already present")]
    Duplicate(String),
    #[error("empty label")]
    EmptyLabel,
}

#[async_trait]
impl ActorEntity for Slot {
    type Id = String;
    type Create = SlotCreate;
    type Action = SlotAction;
    type ActionResult = usize;
    type Query = SlotQuery;
    type Context = ();
    type Error = SlotError;

    fn assign_id(_seq: u32, params: &SlotCreate) -> String {
        params.label.clone()
    }

    fn from_create_params(label: String, _params: SlotCreate) -> Result<Self, Self::Error> {
        if label.is_empty() {
            return Err(SlotError::EmptyLabel);
        }
        Ok(Self {
            label,
            items: Vec::new(),
            locked: false,
        })
    }

    fn matches(&self, query: &SlotQuery) -> bool {
        match query {
            SlotQuery::Locked => self.locked,
            SlotQuery::All => true,
        }
    }

    async fn handle_action(
        &mut self,
        action: SlotAction,
        _ctx: &Self::Context,
    ) -> Result<usize, Self::Error> {
        match action {
            SlotAction::Put(items) => {
                if self.locked {
                    return Err(SlotError::Locked);
                }
                for item in items {
                    if self.items.contains(&item) {
                        return Err(SlotError::Duplicate(item));
                    }
                    self.items.push(item);
                }
                Ok(self.items.len())
            }
            SlotAction::Lock => {
                self.locked = true;
                Ok(self.items.len())
            }
        }
    }
}

fn create(label: &str) -> SlotCreate {
    SlotCreate {
        label: label.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = ResourceActor::<Slot>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("a1")).await.unwrap();
    assert_eq!(id, "a1");

    let size = client
        .perform_action(id.clone(), SlotAction::Put(vec!["bolt".into(), "nut".into()]))
        .await
        .unwrap();
    assert_eq!(size, 2);

    let slot = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(slot.items, vec!["bolt", "nut"]);

    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id.clone()).await.unwrap().is_none());

    let missing = client.delete(id).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_natural_key_rejects_duplicates() {
    let (actor, client) = ResourceActor::<Slot>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create("b2")).await.unwrap();
    let dup = client.create(create("b2")).await;
    assert!(matches!(dup, Err(FrameworkError::AlreadyExists(ref key)) if key == "b2"));

    let invalid = client.create(create("")).await.unwrap_err();
    assert!(matches!(
        invalid.entity_error::<SlotError>(),
        Some(SlotError::EmptyLabel)
    ));
}

#[tokio::test]
async fn test_failed_action_leaves_record_untouched() {
    let (actor, client) = ResourceActor::<Slot>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("c3")).await.unwrap();
    client
        .perform_action(id.clone(), SlotAction::Put(vec!["gear".into()]))
        .await
        .unwrap();

    // "spring" lands on the working copy before "gear" is rejected.
    let err = client
        .perform_action(
            id.clone(),
            SlotAction::Put(vec!["spring".into(), "gear".into()]),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err.entity_error::<SlotError>(),
        Some(SlotError::Duplicate(item)) if item == "gear"
    ));

    let slot = client.get(id).await.unwrap().unwrap();
    assert_eq!(slot.items, vec!["gear"]);
}

#[tokio::test]
async fn test_find_and_purge() {
    let (actor, client) = ResourceActor::<Slot>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["z9", "m5", "d4"] {
        client.create(create(label)).await.unwrap();
    }
    client
        .perform_action("m5".to_string(), SlotAction::Lock)
        .await
        .unwrap();

    let all = client.find(SlotQuery::All).await.unwrap();
    let keys: Vec<_> = all.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["d4", "m5", "z9"]);

    let locked = client.find(SlotQuery::Locked).await.unwrap();
    assert_eq!(locked.len(), 1);
    assert_eq!(locked[0].1.label, "m5");

    let put = client
        .perform_action("m5".to_string(), SlotAction::Put(vec!["x".into()]))
        .await
        .unwrap_err();
    assert!(matches!(put.entity_error::<SlotError>(), Some(SlotError::Locked)));

    assert_eq!(client.purge().await.unwrap(), 3);
    assert!(client.find(SlotQuery::All).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Slot>::new(10);
    drop(actor);

    let result = client.get("any".to_string()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
