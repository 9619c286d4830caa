//! Domain and DNS record endpoints.
//!
//! Domains can be addressed by numeric id or by name; see [`DomainRef`].

use crate::client::DigitalOceanClient;
use crate::models::{Domain, DomainRecord, DomainRecordOptions, RecordType};
use crate::Result;
use digitalocean_core::ids::{DomainRef, RecordId};
use digitalocean_core::QueryParams;
use serde_json::Value;
use std::net::IpAddr;

impl DigitalOceanClient {
    /// List every domain in the account.
    pub async fn list_domains(&self) -> Result<Option<Value>> {
        self.get_field("domains/", QueryParams::new(), "domains")
            .await
    }

    /// Create a domain with an initial `A` record pointing at `ip_address`.
    pub async fn create_domain(&self, name: &str, ip_address: IpAddr) -> Result<Option<Domain>> {
        let params = QueryParams::new()
            .with("name", name)
            .with("ip_address", ip_address);
        self.get_field("domains/new", params, "domain").await
    }

    /// Show a single domain.
    pub async fn get_domain(&self, domain: &DomainRef) -> Result<Option<Domain>> {
        let path = format!("domains/{domain}");
        self.get_field(&path, QueryParams::new(), "domain").await
    }

    /// Delete a domain. Returns the response `status`.
    pub async fn destroy_domain(&self, domain: &DomainRef) -> Result<Option<Value>> {
        let path = format!("domains/{domain}/destroy/");
        self.get_field(&path, QueryParams::new(), "status").await
    }

    /// List the DNS records of a domain.
    pub async fn list_domain_records(
        &self,
        domain: &DomainRef,
    ) -> Result<Option<Value>> {
        let path = format!("domains/{domain}/records/");
        self.get_field(&path, QueryParams::new(), "records").await
    }

    /// Create a DNS record.
    pub async fn create_domain_record(
        &self,
        domain: &DomainRef,
        record_type: RecordType,
        data: &str,
        options: &DomainRecordOptions,
    ) -> Result<Option<DomainRecord>> {
        let path = format!("domains/{domain}/records/new");
        let params = record_params(record_type, data, options);
        self.get_field(&path, params, "domain_record").await
    }

    /// Show a single DNS record.
    pub async fn get_domain_record(
        &self,
        domain: &DomainRef,
        record_id: RecordId,
    ) -> Result<Option<DomainRecord>> {
        let path = format!("domains/{domain}/records/{record_id}");
        self.get_field(&path, QueryParams::new(), "record").await
    }

    /// Replace an existing DNS record.
    pub async fn edit_domain_record(
        &self,
        domain: &DomainRef,
        record_id: RecordId,
        record_type: RecordType,
        data: &str,
        options: &DomainRecordOptions,
    ) -> Result<Option<DomainRecord>> {
        let path = format!("domains/{domain}/records/{record_id}/edit");
        let params = record_params(record_type, data, options);
        self.get_field(&path, params, "domain_record").await
    }

    /// Delete a DNS record. Returns the response `status`.
    pub async fn destroy_domain_record(
        &self,
        domain: &DomainRef,
        record_id: RecordId,
    ) -> Result<Option<Value>> {
        let path = format!("domains/{domain}/records/{record_id}/destroy");
        self.get_field(&path, QueryParams::new(), "status").await
    }
}

fn record_params(record_type: RecordType, data: &str, options: &DomainRecordOptions) -> QueryParams {
    let mut params = QueryParams::new()
        .with("record_type", record_type)
        .with("data", data);
    params.extend(options.to_params());
    params
}

#[cfg(test)]
mod tests {
    use crate::models::{DomainRecordOptions, RecordType};
    use crate::test_support::{authed_get, test_client};
    use digitalocean_core::ids::{DomainRef, RecordId};
    use serde_json::json;
    use std::net::{IpAddr, Ipv4Addr};
    use wiremock::matchers::{method, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_domains_success() {
        let server = MockServer::start().await;
        authed_get("/domains/")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "domains": [{"id": 100, "name": "example.com", "ttl": 1800}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let domains = test_client(&server).list_domains().await.unwrap().unwrap();
        assert_eq!(domains[0]["name"], "example.com");
    }

    #[tokio::test]
    async fn create_domain_sends_name_and_ip() {
        let server = MockServer::start().await;
        authed_get("/domains/new")
            .and(query_param("name", "example.com"))
            .and(query_param("ip_address", "203.0.113.10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "domain": {"id": 101, "name": "example.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let domain = test_client(&server)
            .create_domain("example.com", IpAddr::V4(Ipv4Addr::new(203, 0, 113, 10)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(domain["id"], 101);
    }

    #[tokio::test]
    async fn get_domain_by_id_or_name() {
        let server = MockServer::start().await;
        for route in ["/domains/100", "/domains/example.com"] {
            authed_get(route)
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "status": "OK",
                    "domain": {"id": 100, "name": "example.com"}
                })))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = test_client(&server);
        let by_id = client.get_domain(&DomainRef::from(100u64)).await.unwrap();
        let by_name = client
            .get_domain(&DomainRef::name("example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(by_id, by_name);
    }

    #[tokio::test]
    async fn destroy_domain_returns_status() {
        let server = MockServer::start().await;
        authed_get("/domains/100/destroy/")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        let status = test_client(&server)
            .destroy_domain(&DomainRef::from(100u64))
            .await
            .unwrap();
        assert_eq!(status, Some(json!("OK")));
    }

    #[tokio::test]
    async fn list_domain_records_success() {
        let server = MockServer::start().await;
        authed_get("/domains/example.com/records/")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "records": [{"id": 49, "record_type": "A", "data": "203.0.113.10"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = test_client(&server)
            .list_domain_records(&DomainRef::name("example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(records[0]["record_type"], "A");
    }

    #[tokio::test]
    async fn create_srv_record_sends_all_options() {
        let server = MockServer::start().await;
        authed_get("/domains/100/records/new")
            .and(query_param("record_type", "SRV"))
            .and(query_param("data", "sip.example.com"))
            .and(query_param("name", "_sip._tcp"))
            .and(query_param("priority", "10"))
            .and(query_param("port", "5060"))
            .and(query_param("weight", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "domain_record": {"id": 50, "record_type": "SRV"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = DomainRecordOptions {
            name: Some("_sip._tcp".into()),
            priority: Some(10),
            port: Some(5060),
            weight: Some(5),
        };
        let record = test_client(&server)
            .create_domain_record(
                &DomainRef::from(100u64),
                RecordType::Srv,
                "sip.example.com",
                &options,
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record["id"], 50);
    }

    #[tokio::test]
    async fn get_domain_record_reads_record_field() {
        let server = MockServer::start().await;
        authed_get("/domains/100/records/49")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "record": {"id": 49, "data": "203.0.113.10"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let record = test_client(&server)
            .get_domain_record(&DomainRef::from(100u64), RecordId::new(49))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record["data"], "203.0.113.10");
    }

    #[tokio::test]
    async fn edit_domain_record_omits_unset_options() {
        let server = MockServer::start().await;
        authed_get("/domains/100/records/49/edit")
            .and(query_param("record_type", "CNAME"))
            .and(query_param("data", "@"))
            .and(query_param("name", "www"))
            .and(query_param_is_missing("priority"))
            .and(query_param_is_missing("port"))
            .and(query_param_is_missing("weight"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "domain_record": {"id": 49, "record_type": "CNAME"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = DomainRecordOptions {
            name: Some("www".into()),
            ..DomainRecordOptions::default()
        };
        let record = test_client(&server)
            .edit_domain_record(
                &DomainRef::from(100u64),
                RecordId::new(49),
                RecordType::Cname,
                "@",
                &options,
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record["record_type"], "CNAME");
    }

    #[tokio::test]
    async fn destroy_domain_record_error() {
        let server = MockServer::start().await;
        authed_get("/domains/100/records/49/destroy")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ERROR",
                "error_message": "Record not found"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .destroy_domain_record(&DomainRef::from(100u64), RecordId::new(49))
            .await
            .unwrap_err();
        assert!(err.is_provider());
        assert_eq!(err.to_string(), "Record not found");
    }

    #[tokio::test]
    async fn domain_name_is_sent_as_one_escaped_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        let domain = DomainRef::name("ex%2F..%2Fdroplets").unwrap();
        test_client(&server).destroy_domain(&domain).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.path(), "/domains/ex%252F..%252Fdroplets/destroy/");
        let keys: Vec<String> = requests[0]
            .url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, ["client_id", "api_key"]);
    }

    #[test]
    fn path_like_domain_names_are_rejected() {
        for name in ["", "..", "../droplets/5", "ex?ample.com", "ex#ample.com"] {
            assert!(DomainRef::name(name).is_err(), "accepted `{name}`");
            assert!(name.parse::<DomainRef>().is_err(), "parsed `{name}`");
        }
    }
}
