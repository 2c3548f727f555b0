//! Interactive command loop.

use pf_app::usecases::SubmitContactError;
use pf_core::catalog::ProjectsViewEvent;
use pf_core::{ContactForm, Route};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::command::{Command, HELP};
use super::context::{AppContext, ContactUnavailable};
use super::render;

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn show(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

pub struct Session {
    ctx: AppContext,
}

impl Session {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Navigation bar followed by the current page.
    pub async fn render_current(&self) -> String {
        let theme = match self.ctx.theme().await {
            Ok(theme) => theme,
            Err(err) => {
                warn!(error = %err, "Failed to read theme");
                Default::default()
            }
        };
        let nav = render::render_nav(self.ctx.navigator(), theme);

        let page = match self.ctx.projects() {
            Some(controller) => render::render_projects(&controller.view(), self.ctx.overview()),
            None => render::render_route(self.ctx.route(), self.ctx.metadata()),
        };
        format!("{nav}\n\n{page}")
    }

    /// Parse and apply one input line.
    pub async fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command).await,
            Err(err) => {
                debug!(error = %err, "Rejected command");
                Reply::show(format!("{err}. Type `help` for the list of commands."))
            }
        }
    }

    pub async fn execute(&mut self, command: Command) -> Reply {
        let event = match command {
            Command::Go(route) => {
                self.ctx.navigate(route);
                return Reply::show(self.render_current().await);
            }
            Command::Menu => {
                self.ctx.toggle_menu();
                return Reply::show(self.render_current().await);
            }
            Command::Theme => {
                return match self.ctx.toggle_theme().await {
                    Ok(theme) => Reply::show(format!("Theme: {theme}")),
                    Err(err) => Reply::show(format!("Could not switch theme: {err}")),
                };
            }
            Command::Contact(form) => return Reply::show(self.send_contact(form).await),
            Command::Help => return Reply::show(HELP),
            Command::Quit => {
                return Reply {
                    text: "Bye.".to_string(),
                    quit: true,
                }
            }
            Command::Category(category) => ProjectsViewEvent::SelectCategory(category),
            Command::Search(term) => ProjectsViewEvent::ChangeSearchTerm(term),
            Command::ClearSearch => ProjectsViewEvent::ChangeSearchTerm(String::new()),
            Command::Size(size) => ProjectsViewEvent::ChangePageSize(size),
            Command::Page(page) => ProjectsViewEvent::GoToPage(page),
            Command::Next => ProjectsViewEvent::NextPage,
            Command::Prev => ProjectsViewEvent::PreviousPage,
            Command::Reset => ProjectsViewEvent::ResetFilters,
        };

        let Some(controller) = self.ctx.projects_mut() else {
            return Reply::show("Open the projects page first: go projects");
        };
        let view = controller.dispatch(event);
        Reply::show(render::render_projects(&view, self.ctx.overview()))
    }

    async fn send_contact(&mut self, form: ContactForm) -> String {
        if self.ctx.route() != Route::Contact {
            self.ctx.navigate(Route::Contact);
        }
        match self.ctx.submit_contact(&form).await {
            Ok(receipt) => format!(
                "Message sent! I'll get back to you soon. (reference {})",
                receipt.message_id
            ),
            Err(ContactUnavailable::NotConfigured) => {
                "The contact form is unavailable: no endpoint is configured.".to_string()
            }
            Err(ContactUnavailable::Submit(SubmitContactError::Invalid(errors))) => errors
                .iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(ContactUnavailable::Submit(err)) => format!("Message not sent: {err}"),
        }
    }

    /// Read commands line by line until `quit` or end of input.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let banner = self.render_current().await;
        writer.write_all(format!("{banner}\n> ").as_bytes()).await?;
        writer.flush().await?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                writer.write_all(b"> ").await?;
                writer.flush().await?;
                continue;
            }

            let reply = self.handle_line(&line).await;
            writer.write_all(reply.text.as_bytes()).await?;
            if reply.quit {
                writer.write_all(b"\n").await?;
                break;
            }
            writer.write_all(b"\n> ").await?;
            writer.flush().await?;
        }

        writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::wire_dependencies;
    use crate::shell::defaults::ShellDefaults;

    fn session() -> Session {
        let defaults = ShellDefaults::default();
        let ctx = AppContext::new(wire_dependencies(&defaults).unwrap(), &defaults).unwrap();
        Session::new(ctx)
    }

    #[tokio::test]
    async fn catalog_commands_need_projects_page() {
        let mut session = session();

        let reply = session.handle_line("next").await;

        assert_eq!(reply.text, "Open the projects page first: go projects");
    }

    #[tokio::test]
    async fn unknown_command_changes_nothing() {
        let mut session = session();
        session.handle_line("go projects").await;

        let reply = session.handle_line("jump 3").await;

        assert!(reply.text.contains("unknown command `jump`"));
        assert_eq!(
            session.context().projects().unwrap().state().page.current_page,
            1
        );
    }

    #[tokio::test]
    async fn invalid_page_size_keeps_state() {
        let mut session = session();
        session.handle_line("go projects").await;

        let reply = session.handle_line("size 7").await;

        assert!(reply.text.contains("(6 per page)"));
    }

    #[tokio::test]
    async fn quit_ends_session() {
        let mut session = session();

        assert!(session.handle_line("quit").await.quit);
    }

    #[tokio::test]
    async fn contact_without_endpoint_is_reported() {
        let mut session = session();

        let reply = session
            .handle_line("contact Ada|ada@example.com||Hello")
            .await;

        assert_eq!(
            reply.text,
            "The contact form is unavailable: no endpoint is configured."
        );
        assert_eq!(session.context().route(), Route::Contact);
    }

    #[tokio::test]
    async fn contact_field_errors_shown_without_endpoint() {
        let mut session = session();

        let reply = session.handle_line("contact |not-an-email||").await;

        assert_eq!(
            reply.text,
            "Name is required\nEmail is invalid\nMessage is required"
        );
        assert_eq!(session.context().route(), Route::Contact);
    }
}
