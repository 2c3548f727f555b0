//! End-to-end sessions over in-memory input.

use std::time::Duration;

use folio_lib::bootstrap::wire_dependencies;
use folio_lib::{AppContext, Session, ShellDefaults};
use pf_core::catalog::CategoryFilter;
use pf_core::Route;

fn session_with(defaults: ShellDefaults) -> Session {
    let deps = wire_dependencies(&defaults).expect("wiring succeeds");
    Session::new(AppContext::new(deps, &defaults).expect("catalog loads"))
}

async fn run_script(session: &mut Session, script: &str) -> String {
    let mut output = Vec::new();
    session
        .run(script.as_bytes(), &mut output)
        .await
        .expect("session runs");
    String::from_utf8(output).expect("utf-8 output")
}

#[tokio::test]
async fn browsing_projects_end_to_end() {
    let mut session = session_with(ShellDefaults::default());

    let output = run_script(
        &mut session,
        "go projects\ncategory fullstack\nsize 3\nnext\nsearch laravel\nquit\n",
    )
    .await;

    assert!(output.contains("[Home]"));
    assert!(output.contains("Showing 4-6 of 7 projects  (3 per page)"));
    assert!(output.contains("Search results for: \"laravel\""));
    assert!(output.ends_with("Bye.\n"));

    let controller = session.context().projects().expect("still on projects");
    let state = controller.state();
    assert_eq!(state.filter.category, CategoryFilter::Fullstack);
    assert_eq!(state.page.current_page, 1);
}

#[tokio::test]
async fn end_of_input_stops_the_loop() {
    let mut session = session_with(ShellDefaults::default());

    let output = run_script(&mut session, "go about\n").await;

    assert!(output.contains("[About]"));
    assert_eq!(session.context().route(), Route::About);
}

#[tokio::test]
async fn configured_page_size_applies_on_entry() {
    let mut session = session_with(ShellDefaults {
        page_size: pf_core::PageSize::Nine,
        ..ShellDefaults::default()
    });

    let output = run_script(&mut session, "go projects\nquit\n").await;

    assert!(output.contains("Showing 1-9 of 10 projects  (9 per page)"));
}

#[tokio::test]
async fn contact_message_reaches_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/contact")
        .with_status(200)
        .create_async()
        .await;
    let mut session = session_with(ShellDefaults {
        contact_endpoint: Some(format!("{}/contact", server.url())),
        contact_timeout: Duration::from_secs(5),
        ..ShellDefaults::default()
    });

    let reply = session
        .handle_line("contact Ada|ada@example.com|Hi|Let's build something")
        .await;

    mock.assert_async().await;
    assert!(reply.text.starts_with("Message sent!"));
    assert_eq!(session.context().route(), Route::Contact);
}

#[tokio::test]
async fn invalid_contact_form_is_not_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/contact")
        .expect(0)
        .create_async()
        .await;
    let mut session = session_with(ShellDefaults {
        contact_endpoint: Some(format!("{}/contact", server.url())),
        ..ShellDefaults::default()
    });

    let reply = session.handle_line("contact |not-an-email||").await;

    mock.assert_async().await;
    assert_eq!(
        reply.text,
        "Name is required\nEmail is invalid\nMessage is required"
    );
}
