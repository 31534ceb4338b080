use uuid::Uuid;

/// Fresh random identifier; collisions are probabilistically excluded, not sequentially.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
