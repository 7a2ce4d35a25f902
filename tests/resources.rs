//! Resource accessor routing tests against a local mock Freshservice.

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use freshservice::models::{
    ticket_status, Agent, AgentRole, AssetListOptions, ServiceItemListFilter, SortOrder, Task,
    TicketListOptions, TicketView,
};
use freshservice::{Client, Config, FreshserviceError};

fn client_for(server: &MockServer) -> Client {
    let config = Config::new(server.uri(), "testAPIKey").with_insecure(true);
    Client::new(&config).unwrap()
}

fn agent_body(id: u64, active: bool) -> serde_json::Value {
    json!({"agent": {"id": id, "email": "ada@example.com", "active": active}})
}

async fn mount(server: &MockServer, verb: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn ticket_list_with_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(query_param("filter", "watching"))
        .and(query_param("email", "ada@example.com"))
        .and(query_param("order_type", "desc"))
        .and(query_param("include", "requester,stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tickets": [
                {"id": 2, "subject": "Second", "status": 3},
                {"id": 1, "subject": "First", "status": 2}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = TicketListOptions::new()
        .with_view(TicketView::Watching)
        .with_requester_email("ada@example.com")
        .with_sort(SortOrder::Descending)
        .with_requester_info()
        .with_stats();
    let page = assert_ok!(client_for(&server).tickets().list(Some(&options)).await);

    let ids: Vec<_> = page.items.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![Some(2), Some(1)]);
    assert_eq!(page.items[1].status, Some(ticket_status::OPEN));
}

#[tokio::test]
async fn ticket_create_posts_bare_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/tickets"))
        .and(body_json(json!({
            "subject": "Printer on fire",
            "email": "ada@example.com",
            "status": 2,
            "priority": 4
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"ticket": {"id": 55, "subject": "Printer on fire"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ticket = freshservice::models::Ticket {
        subject: Some("Printer on fire".to_string()),
        email: Some("ada@example.com".to_string()),
        status: Some(ticket_status::OPEN),
        priority: Some(freshservice::models::ticket_priority::URGENT),
        ..Default::default()
    };
    let created = assert_ok!(client_for(&server).tickets().create(&ticket).await);
    assert_eq!(created.id, Some(55));
}

#[tokio::test]
async fn agent_lifecycle_routes() {
    let server = MockServer::start().await;

    mount(&server, "DELETE", "/api/v2/agents/9", agent_body(9, false)).await;
    mount(&server, "PUT", "/api/v2/agents/9/reactivate", agent_body(9, true)).await;
    mount(
        &server,
        "PUT",
        "/api/v2/agents/9/convert_to_requester",
        agent_body(9, true),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/agents/9/forget"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let agents = client.agents();

    let deactivated = assert_ok!(agents.deactivate(9).await);
    assert_eq!(deactivated.active, Some(false));

    let reactivated = assert_ok!(agents.reactivate(9).await);
    assert_eq!(reactivated.active, Some(true));

    let converted = assert_ok!(agents.convert_to_requester(9).await);
    assert_eq!(converted.id, Some(9));

    assert_ok!(agents.delete(9).await);
}

#[tokio::test]
async fn agent_with_invalid_role_is_never_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/agents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(agent_body(1, true)))
        .expect(0)
        .mount(&server)
        .await;

    let agent = Agent {
        email: Some("ada@example.com".to_string()),
        roles: vec![AgentRole {
            role_id: 3,
            assignment_scope: "member_groups".to_string(),
            groups: vec![12],
        }],
        ..Default::default()
    };

    let err = assert_err!(client_for(&server).agents().create(&agent).await);
    assert!(matches!(err, FreshserviceError::Validation(_)));
}

#[tokio::test]
async fn task_routes_nest_under_ticket() {
    let server = MockServer::start().await;

    mount(
        &server,
        "GET",
        "/api/v2/tickets/101/tasks",
        json!({"tasks": [{"id": 1, "title": "Image laptop"}]}),
    )
    .await;
    mount(
        &server,
        "GET",
        "/api/v2/tickets/101/tasks/1",
        json!({"task": {"id": 1, "title": "Image laptop"}}),
    )
    .await;
    mount(
        &server,
        "POST",
        "/api/v2/tickets/101/tasks",
        json!({"task": {"id": 2, "title": "Ship laptop"}}),
    )
    .await;
    mount(
        &server,
        "PUT",
        "/api/v2/tickets/101/tasks/2",
        json!({"task": {"id": 2, "title": "Ship laptop", "status": 3}}),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/101/tasks/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tasks = client.tasks();

    assert_eq!(assert_ok!(tasks.list(101).await).len(), 1);
    assert_eq!(
        assert_ok!(tasks.get(101, 1).await).title.as_deref(),
        Some("Image laptop")
    );

    let new_task = Task {
        title: Some("Ship laptop".to_string()),
        ..Default::default()
    };
    assert_eq!(assert_ok!(tasks.create(101, &new_task).await).id, Some(2));

    let done = Task {
        status: Some(3),
        ..Default::default()
    };
    assert_eq!(assert_ok!(tasks.update(101, 2, &done).await).status, Some(3));

    assert_ok!(tasks.delete(101, 2).await);
}

#[tokio::test]
async fn application_subresources() {
    let server = MockServer::start().await;

    mount(
        &server,
        "GET",
        "/api/v2/applications/7",
        json!({"application": {"id": 7, "name": "Slack"}}),
    )
    .await;
    mount(
        &server,
        "GET",
        "/api/v2/applications/7/licenses",
        json!({"licenses": [{"id": 1, "contract_id": "C-1"}]}),
    )
    .await;
    mount(
        &server,
        "GET",
        "/api/v2/applications/7/users",
        json!({"application_users": [{"id": 1, "user_id": 40}]}),
    )
    .await;
    mount(
        &server,
        "GET",
        "/api/v2/applications/7/installations",
        json!({"installations": [{"id": 1, "version": "4.2.0"}, {"id": 2, "version": "4.3.1"}]}),
    )
    .await;

    let client = client_for(&server);
    let apps = client.applications();

    assert_eq!(assert_ok!(apps.get(7).await).name.as_deref(), Some("Slack"));
    assert_eq!(
        assert_ok!(apps.licenses(7).await)[0].contract_id.as_deref(),
        Some("C-1")
    );
    assert_eq!(assert_ok!(apps.users(7).await)[0].user_id, Some(40));
    assert_eq!(assert_ok!(apps.installations(7).await).len(), 2);
}

#[tokio::test]
async fn asset_list_options_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("include", "type_fields"))
        .and(query_param("trashed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"assets": []})))
        .expect(1)
        .mount(&server)
        .await;

    let options = AssetListOptions::new().with_type_fields().trashed();
    let page = assert_ok!(client_for(&server).assets().list(Some(&options)).await);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn service_catalog_routes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/service_catalog/items"))
        .and(query_param("category_id", "12"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"service_items": [{"id": 1, "name": "MacBook Pro"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "GET",
        "/api/v2/service_catalog/categories",
        json!({"service_categories": [{"id": 12, "name": "Hardware", "position": 1}]}),
    )
    .await;
    mount(
        &server,
        "GET",
        "/api/v2/service_catalog/items/1",
        json!({"service_item": {"id": 1, "name": "MacBook Pro", "cost": "1299.0"}}),
    )
    .await;

    let client = client_for(&server);
    let catalog = client.service_catalog();

    let items = assert_ok!(catalog.list(Some(&ServiceItemListFilter::new(12))).await);
    assert_eq!(items[0].name.as_deref(), Some("MacBook Pro"));

    let categories = assert_ok!(catalog.categories().await);
    assert_eq!(categories[0].position, Some(1));

    let item = assert_ok!(catalog.get(1).await);
    assert_eq!(item.cost.as_deref(), Some("1299.0"));
}

#[tokio::test]
async fn business_hours_get_uses_singular_envelope() {
    let server = MockServer::start().await;

    mount(
        &server,
        "GET",
        "/api/v2/business_hours/2",
        json!({"business_hours": {"id": 2, "name": "EMEA", "time_zone": "London"}}),
    )
    .await;

    let hours = assert_ok!(client_for(&server).business_hours().get(2).await);
    assert_eq!(hours.name.as_deref(), Some("EMEA"));
}
