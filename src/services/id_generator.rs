//! Identifier generation for new users.

use uuid::Uuid;

/// Produces a unique identifier for each new record.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Time-based (version 1) UUIDs.
///
/// The node id is random per process, with the multicast bit set so it can
/// never collide with a real MAC address.
pub struct TimeUuidGenerator {
    node_id: [u8; 6],
}

impl TimeUuidGenerator {
    pub fn new() -> Self {
        let random = Uuid::new_v4();
        let mut node_id = [0u8; 6];
        node_id.copy_from_slice(&random.as_bytes()[..6]);
        node_id[0] |= 0x01;
        Self { node_id }
    }
}

impl Default for TimeUuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimeUuidGenerator {
    fn generate(&self) -> String {
        Uuid::now_v1(&self.node_id).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_version_1_uuids() {
        let generator = TimeUuidGenerator::new();
        let id = Uuid::parse_str(&generator.generate()).unwrap();
        assert_eq!(id.get_version_num(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let generator = TimeUuidGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
