//! End-to-end tests against the live sample server.
//!
//! # Design
//! Starts the sample server on a random port, then exercises every core
//! client operation over real HTTP using ureq. Validates that the core's
//! request building and response parsing work end-to-end with the actual
//! server and its seed data.

use users_core::{ApiError, CreateUser, HttpMethod, HttpResponse, UpdateUser, UserClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: users_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => {
            let mut builder = agent.delete(&req.path);
            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }
            builder.call()
        }
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => agent
            .patch(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers,
        body,
    }
}

/// Start the sample server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            sample_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn users_crud_lifecycle() {
    let client = UserClient::new(&start_server());

    // Seed data: three records in ascending ID order.
    let req = client.build_list_users(None);
    let users = client.parse_list_users(execute(req)).unwrap();
    let ids: Vec<u32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    // Create a user; IDs for new records start at 100.
    let input = CreateUser {
        name: Some("Artem".to_string()),
        email: Some("good_cat@mail.ru".to_string()),
    };
    let req = client.build_create_user(&input).unwrap();
    let created = client.parse_create_user(execute(req)).unwrap();
    assert!(created.id >= 100);
    assert_eq!(created.name.as_deref(), Some("Artem"));

    // The created user is retrievable.
    let req = client.build_get_user(created.id);
    let fetched = client.parse_get_user(execute(req)).unwrap();
    assert_eq!(fetched, Some(created));

    // Exact name filter matches only the seeded "Sergey".
    let req = client.build_list_users(Some("Sergey"));
    let users = client.parse_list_users(execute(req)).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 2);

    // Unknown ID is absence, not an error.
    let req = client.build_get_user(999);
    let fetched = client.parse_get_user(execute(req)).unwrap();
    assert!(fetched.is_none());

    // Partial update: email only, name untouched.
    let updates = UpdateUser {
        name: None,
        email: Some("popa@mail.ru".to_string()),
    };
    let req = client.build_update_user(1, &updates).unwrap();
    let response = execute(req);
    assert!(response
        .headers
        .iter()
        .any(|(name, value)| name == "patch-id" && value == "7"));
    client.parse_update_user(response).unwrap();

    let req = client.build_get_user(1);
    let user = client.parse_get_user(execute(req)).unwrap().unwrap();
    assert_eq!(user.name.as_deref(), Some("user"));
    assert_eq!(user.email.as_deref(), Some("popa@mail.ru"));

    // Updating an unknown ID reports NotFound.
    let updates = UpdateUser {
        name: Some("nobody".to_string()),
        email: None,
    };
    let req = client.build_update_user(999, &updates).unwrap();
    let err = client.parse_update_user(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Delete with a wrong token is rejected and leaves the record intact.
    let req = client.build_delete_user(1, "wrong");
    let err = client.parse_delete_user(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    let req = client.build_get_user(1);
    assert!(client.parse_get_user(execute(req)).unwrap().is_some());

    // Delete with the correct token removes the record.
    let req = client.build_delete_user(1, "123");
    client.parse_delete_user(execute(req)).unwrap();

    let req = client.build_get_user(1);
    assert!(client.parse_get_user(execute(req)).unwrap().is_none());
}

#[test]
fn admin_lookup_and_delete_all() {
    let client = UserClient::new(&start_server());

    // The admin convenience lookup targets the seeded record with ID 0.
    let req = client.build_get_admin();
    let admin = client.parse_get_user(execute(req)).unwrap().unwrap();
    assert_eq!(admin.id, 0);
    assert_eq!(admin.name.as_deref(), Some("admin"));

    // Delete-all is a loop over the primitives: list, then delete each.
    let req = client.build_list_users(None);
    let users = client.parse_list_users(execute(req)).unwrap();
    for user in users {
        let req = client.build_delete_user(user.id, "123");
        client.parse_delete_user(execute(req)).unwrap();
    }

    let req = client.build_list_users(None);
    let users = client.parse_list_users(execute(req)).unwrap();
    assert!(users.is_empty());
}
