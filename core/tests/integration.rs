//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the page, form, and
//! editor over real HTTP using a ureq-backed transport. Validates that the
//! core's request building, response parsing, and state reconciliation work
//! end-to-end with the actual server.

use todomaster_core::{
    AddTodoForm, ApiError, HttpMethod, HttpRequest, HttpResponse, ItemEditor, TodoClient,
    TodoPage, Transport, TransportError, UpdateTodo,
};

/// Execute an `HttpRequest` using ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core client
/// handle status interpretation. Transport-level failures map to
/// `TransportError`.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Start the mock server on a random port and return its base URL.
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
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn page_lifecycle() {
    let base_url = start_server();
    let mut page = TodoPage::new(&base_url, UreqTransport::new());

    // Step 1: health probe.
    let health = page.health_check().unwrap();
    assert_eq!(health.status, "ok");

    // Step 2: initial load — empty.
    assert!(page.load_todos());
    assert!(page.todos().is_empty(), "expected empty list");
    assert!(!page.is_loading());

    // Step 3: create through the form; whitespace description becomes null.
    let mut form = AddTodoForm::new();
    form.set_title("  Integration test  ");
    form.set_description("   ");
    assert!(form.submit(&mut page));
    assert_eq!(form.title(), "");

    let created = page.todos()[0].clone();
    assert_eq!(created.title, "Integration test");
    assert!(created.description.is_none());
    assert!(!created.completed);
    assert!(!created.created_at.is_empty());

    // Step 4: create-then-get round trip returns an equal entity.
    let client = TodoClient::new(&base_url);
    let mut transport = UreqTransport::new();
    let req = client.build_get_todo(created.id);
    let fetched = client.parse_get_todo(transport.execute(req).unwrap()).unwrap();
    assert_eq!(fetched, created);

    // Step 5: edit through the item editor.
    let mut editor = ItemEditor::new(&created);
    editor.start_edit(&created);
    editor.set_edit_title("Updated title");
    editor.set_edit_description("now with notes");
    assert!(editor.save(&mut page));
    assert!(!editor.is_editing());
    assert_eq!(page.todos()[0].title, "Updated title");
    assert_eq!(page.todos()[0].description.as_deref(), Some("now with notes"));
    assert!(!page.todos()[0].completed);

    // Step 6: toggle completion from viewing mode.
    assert!(editor.toggle_completed(&mut page));
    assert!(page.todos()[0].completed);

    // Step 7: the same patch twice leaves the entity in the same state.
    assert!(page.update_todo(created.id, UpdateTodo::completed(true)));
    let after_first = page.todos()[0].clone();
    assert!(page.update_todo(created.id, UpdateTodo::completed(true)));
    assert_eq!(page.todos()[0], after_first);

    // Step 8: delete with confirmation.
    editor.request_delete();
    assert!(editor.confirm_delete(&mut page));
    assert!(page.todos().is_empty());
    assert!(page.error().is_none());

    // Step 9: get after delete — NotFound.
    let req = client.build_get_todo(created.id);
    let err = client.parse_get_todo(transport.execute(req).unwrap()).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 10: deleting again surfaces the not-found message on the page.
    assert!(!page.delete_todo(created.id));
    assert_eq!(page.error(), Some("Resource not found"));
    page.dismiss_error();
    assert!(page.error().is_none());

    // Step 11: server-side validation — empty title is rejected.
    let req = client
        .build_create_todo(&todomaster_core::CreateTodo {
            title: "   ".to_string(),
            description: None,
        })
        .unwrap();
    let err = client
        .parse_create_todo(transport.execute(req).unwrap())
        .unwrap_err();
    assert!(matches!(&err, ApiError::Validation(d) if d == "Title must not be empty"));
}

#[test]
fn newest_creations_are_prepended_locally() {
    let base_url = start_server();
    let mut page = TodoPage::new(&base_url, UreqTransport::new());
    assert!(page.load_todos());

    let mut form = AddTodoForm::new();
    for title in ["first", "second", "third"] {
        form.set_title(title);
        assert!(form.submit(&mut page));
    }

    // local order is newest-first even though the server lists insertion order
    let titles: Vec<&str> = page.todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);

    // a reload adopts the server's order wholesale
    assert!(page.load_todos());
    let titles: Vec<&str> = page.todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn unreachable_backend_surfaces_network_error() {
    // nothing is listening on this port
    let mut page = TodoPage::new("http://127.0.0.1:1", UreqTransport::new());
    assert!(!page.load_todos());
    assert_eq!(
        page.error(),
        Some("Network error - check if backend is running")
    );
    assert!(page.todos().is_empty());
    assert!(!page.is_loading());
}
