//! Record synthesis from fake field values.

use fakegen_faker::FakeSource;
use fakegen_records::{AccessEvent, HttpMethod, Profile};

/// Synthesize a fresh profile. The username doubles as the entity id.
pub fn profile(faker: &mut FakeSource) -> Profile {
    Profile {
        entity_id: faker.username(),
        first_name: faker.first_name(),
        last_name: faker.last_name(),
        address: faker.address(),
        phone: faker.phone(),
        secret: faker.password(),
        plan_tier: faker.plan_terms(),
        payment_token: faker.card_number(),
    }
}

/// Synthesize an access event attributed to `entity_id` at `timestamp`.
pub fn access_event(faker: &mut FakeSource, entity_id: String, timestamp: String) -> AccessEvent {
    AccessEvent {
        entity_id,
        source_addr: faker.ipv4(),
        timestamp,
        method: HttpMethod::Get,
        target: faker.url(),
        status_code: "200".to_string(),
        user_agent: faker.user_agent(),
    }
}
