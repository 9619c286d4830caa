//! Event endpoint.

use crate::client::DigitalOceanClient;
use crate::models::Event;
use crate::Result;
use digitalocean_core::ids::EventId;
use digitalocean_core::QueryParams;

impl DigitalOceanClient {
    /// Report on the progress of an event returned by a droplet or image action.
    pub async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let path = format!("events/{id}");
        self.get_field(&path, QueryParams::new(), "event").await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{authed_get, test_client};
    use digitalocean_core::ids::EventId;
    use serde_json::json;
    use wiremock::{MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_event_success() {
        let server = MockServer::start().await;
        authed_get("/events/7499")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "event": {
                    "id": 7499,
                    "action_status": "done",
                    "droplet_id": 100824,
                    "event_type_id": 1,
                    "percentage": "100"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let event = test_client(&server)
            .get_event(EventId::new(7499))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event["action_status"], "done");
    }

    #[tokio::test]
    async fn get_event_transport_failure() {
        let client = crate::DigitalOceanClient::builder("id", "key")
            .with_api_url("http://127.0.0.1:1")
            .build()
            .unwrap();

        let err = client.get_event(EventId::new(1)).await.unwrap_err();
        assert!(err.is_transport());
    }
}
