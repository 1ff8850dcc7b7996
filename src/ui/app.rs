//! Main application state and UI loop
//!
//! Contains the App struct, navigation and the main UI event handling logic.
//! Requests are awaited inline: a view issues at most one at a time and the
//! loop redraws with a busy label before waiting on it.

use crate::api::BeneficioApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::error_handler::ErrorHandler;
use crate::events::{Event as AppEvent, Origin};
use crate::ui::components::{footer::render_footer, header::render_header};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::form::{FORM_HINTS, FormState, render_form};
use crate::ui::list::{LIST_HINTS, ListState, render_list};
use crate::ui::notification::{Notification, Reply, render_notification};
use crate::ui::splash::render_splash;
use crate::ui::transfer::{TRANSFER_HINTS, TransferState, render_transfer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

const DASHBOARD_HINTS: &str =
    "[L] Benefícios | [N] Novo | [T] Transferir | [R] Atualizar | [Q] Sair";

/// Navigation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    List,
    New,
    Edit(i64),
    Transfer,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Navigate(Route),
    /// Re-query the list; a blank term loads everything.
    Search(String),
    /// Open the confirmation modal for an inactivation.
    ConfirmDelete { id: i64, nome: String },
    Delete(i64),
    /// Submit the create/edit form.
    Save,
    /// Submit the transfer form.
    Transfer,
}

impl Action {
    /// Label drawn while the action's request is in flight.
    pub fn busy_label(&self) -> Option<&'static str> {
        match self {
            Action::Navigate(Route::New) => None,
            Action::Navigate(_) | Action::Search(_) => Some("Carregando..."),
            Action::Save => Some("Salvando..."),
            Action::Transfer => Some("Processando..."),
            Action::Delete(_) => Some("Inativando..."),
            Action::None | Action::Quit | Action::ConfirmDelete { .. } => None,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    Dashboard,
    List(ListState),
    Form(FormState),
    Transfer(TransferState),
}

impl Screen {
    fn captures_text(&self) -> bool {
        match self {
            Screen::List(state) => state.captures_text(),
            Screen::Transfer(state) => state.captures_text(),
            Screen::Form(state) => state.focus.is_text(),
            Screen::Splash | Screen::Dashboard => false,
        }
    }
}

/// Application state
pub struct App {
    api: Box<dyn BeneficioApi>,

    /// The current screen being displayed in the application.
    screen: Screen,

    /// Session-wide dashboard state, including the activity log.
    dashboard: DashboardState,

    /// Modal alert or confirmation, if one is open.
    notification: Option<Notification>,

    /// Set while a request is in flight.
    busy: Option<&'static str>,

    error_handler: ErrorHandler,

    should_quit: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Box<dyn BeneficioApi>, with_background_color: bool) -> Self {
        let dashboard = DashboardState::new(
            api.environment().clone(),
            Instant::now(),
            with_background_color,
        );
        Self {
            api,
            screen: Screen::Splash,
            dashboard,
            notification: None,
            busy: None,
            error_handler: ErrorHandler::new(),
            should_quit: false,
        }
    }

    /// Maps a key press to an action. Only local state changes happen here.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if let Some(notification) = &self.notification {
            return match notification.handle_key(key) {
                Reply::Ignored => Action::None,
                Reply::Dismissed => {
                    self.notification = None;
                    Action::None
                }
                Reply::Confirmed(action) => {
                    self.notification = None;
                    action
                }
            };
        }

        if let Screen::Splash = self.screen {
            return Action::Navigate(Route::Dashboard);
        }

        if !self.screen.captures_text() {
            match key.code {
                KeyCode::Char('q') => return Action::Quit,
                KeyCode::Char('d') => return Action::Navigate(Route::Dashboard),
                KeyCode::Char('l') => return Action::Navigate(Route::List),
                KeyCode::Char('n') => return Action::Navigate(Route::New),
                KeyCode::Char('t') => return Action::Navigate(Route::Transfer),
                _ => {}
            }
        }

        match &mut self.screen {
            Screen::Splash => Action::None,
            Screen::Dashboard => match key.code {
                KeyCode::Char('r') => Action::Navigate(Route::Dashboard),
                KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            Screen::List(state) => state.handle_key(key),
            Screen::Form(state) => state.handle_key(key),
            Screen::Transfer(state) => state.handle_key(key),
        }
    }

    /// Runs an action, awaiting its request if it has one.
    pub async fn perform(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Navigate(route) => self.navigate(route).await,
            Action::Search(term) => self.load_list(&term).await,
            Action::ConfirmDelete { id, nome } => {
                self.notification = Some(Notification::confirm(
                    format!("Tem certeza que deseja inativar o benefício \"{}\"?", nome),
                    Action::Delete(id),
                ));
            }
            Action::Delete(id) => self.delete(id).await,
            Action::Save => self.save().await,
            Action::Transfer => self.transfer().await,
        }
    }

    /// `handle_key` followed by `perform`.
    pub async fn press(&mut self, key: KeyEvent) {
        let action = self.handle_key(key);
        self.perform(action).await;
    }

    async fn navigate(&mut self, route: Route) {
        match route {
            Route::Dashboard => {
                self.screen = Screen::Dashboard;
                match self.api.find_all().await {
                    Ok(beneficios) => {
                        self.dashboard.set_beneficios(&beneficios);
                        self.log(AppEvent::refresh(
                            Origin::Dashboard,
                            format!("{} benefícios carregados", beneficios.len()),
                        ));
                    }
                    Err(e) => self.report(Origin::Dashboard, &e, "Erro ao carregar benefícios"),
                }
            }
            Route::List => self.open_list().await,
            Route::New => self.screen = Screen::Form(FormState::new()),
            Route::Edit(id) => match self.api.find_by_id(id).await {
                Ok(beneficio) => self.screen = Screen::Form(FormState::edit(&beneficio)),
                Err(e) => {
                    self.open_list().await;
                    self.record_failure(Origin::Form, &e, "Erro ao carregar benefício");
                    self.notification = Some(Notification::error("Erro ao carregar benefício"));
                }
            },
            Route::Transfer => match self.api.find_ativos().await {
                Ok(ativos) => self.screen = Screen::Transfer(TransferState::new(ativos)),
                Err(e) => {
                    self.screen = Screen::Transfer(TransferState::new(Vec::new()));
                    self.report(Origin::Transfer, &e, "Erro ao carregar benefícios");
                }
            },
        }
    }

    async fn open_list(&mut self) {
        self.screen = Screen::List(ListState::new());
        self.load_list("").await;
    }

    /// Fills the list view; does nothing on other screens.
    async fn load_list(&mut self, term: &str) {
        if !matches!(self.screen, Screen::List(_)) {
            return;
        }
        let term = term.trim();
        let result = if term.is_empty() {
            self.api.find_all().await
        } else {
            self.api.find_by_nome(term).await
        };
        match result {
            Ok(beneficios) => {
                if let Screen::List(state) = &mut self.screen {
                    state.set_beneficios(beneficios);
                }
            }
            Err(e) => self.report(Origin::List, &e, "Erro ao carregar benefícios"),
        }
    }

    async fn delete(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => {
                self.log(AppEvent::success(
                    Origin::List,
                    format!("Benefício #{} inativado", id),
                ));
                let term = match &self.screen {
                    Screen::List(state) => state.search.clone(),
                    _ => String::new(),
                };
                self.load_list(&term).await;
            }
            Err(e) => self.report(Origin::List, &e, "Erro ao inativar benefício"),
        }
    }

    async fn save(&mut self) {
        let Screen::Form(state) = &self.screen else {
            return;
        };
        let request = match state.form.validate() {
            Ok(request) => request,
            Err(_) => return,
        };
        let (result, success) = match state.editing {
            Some(id) => (
                self.api.update(id, &request).await,
                "Benefício atualizado com sucesso!",
            ),
            None => (
                self.api.create(&request).await,
                "Benefício criado com sucesso!",
            ),
        };
        match result {
            Ok(saved) => {
                self.log(AppEvent::success(
                    Origin::Form,
                    format!("{} (#{} {})", success, saved.id, saved.nome),
                ));
                self.open_list().await;
                self.notification = Some(Notification::success(success));
            }
            Err(e) => self.report(Origin::Form, &e, "Erro ao salvar benefício"),
        }
    }

    async fn transfer(&mut self) {
        let Screen::Transfer(state) = &self.screen else {
            return;
        };
        let request = match state.form.validate() {
            Ok(request) => request,
            Err(_) => return,
        };
        match self.api.transfer(&request).await {
            Ok(()) => {
                self.log(AppEvent::success(
                    Origin::Transfer,
                    format!(
                        "Transferência de {} de #{} para #{}",
                        crate::pretty::format_brl(request.amount),
                        request.from_id,
                        request.to_id
                    ),
                ));
                self.open_list().await;
                self.notification =
                    Some(Notification::success("Transferência realizada com sucesso!"));
            }
            Err(e) => self.report(Origin::Transfer, &e, "Erro ao realizar transferência"),
        }
    }

    fn log(&mut self, event: AppEvent) {
        log::log!(event.log_level, "{}", event);
        self.dashboard.add_to_activity_log(event);
    }

    fn record_failure(&mut self, origin: Origin, error: &ApiError, context: &str) {
        let level = self.error_handler.classify_error(error);
        self.log(AppEvent::error_with_level(
            origin,
            format!("{}: {}", context, error),
            level,
        ));
    }

    /// Shows the server message (or `fallback`) and records the failure.
    fn report(&mut self, origin: Origin, error: &ApiError, fallback: &str) {
        self.record_failure(origin, error, fallback);
        self.notification = Some(Notification::error(error.user_message(fallback)));
    }

    fn chrome(&self) -> (String, &'static str, &'static str) {
        match &self.screen {
            Screen::Splash => (String::new(), "", ""),
            Screen::Dashboard => (
                "Bem-vindo ao BenefitX".to_string(),
                "Gerencie os benefícios dos colaboradores",
                DASHBOARD_HINTS,
            ),
            Screen::List(_) => (
                "BENEFÍCIOS".to_string(),
                "Consulte, edite e inative benefícios",
                LIST_HINTS,
            ),
            Screen::Form(state) => (
                state.title(),
                "Campos com * são obrigatórios",
                FORM_HINTS,
            ),
            Screen::Transfer(_) => (
                "TRANSFERÊNCIA DE SALDO".to_string(),
                "Transfira valores entre benefícios ativos",
                TRANSFER_HINTS,
            ),
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        terminal.draw(|f| render(f, &app))?;

        if let Screen::Splash = app.screen {
            if splash_start.elapsed() >= splash_duration {
                app.perform(Action::Navigate(Route::Dashboard)).await;
                continue;
            }
        }

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                let action = app.handle_key(key);
                if let Some(label) = action.busy_label() {
                    app.busy = Some(label);
                    terminal.draw(|f| render(f, &app))?;
                }
                app.perform(action).await;
                app.busy = None;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    if app.dashboard.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    if let Screen::Splash = app.screen {
        render_splash(f);
        return;
    }

    let (title, subtitle, hints) = app.chrome();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    render_header(f, chunks[0], &title, subtitle, app.busy);
    match &app.screen {
        Screen::Splash => {}
        Screen::Dashboard => render_dashboard(f, chunks[1], &app.dashboard),
        Screen::List(state) => render_list(f, chunks[1], state),
        Screen::Form(state) => render_form(f, chunks[1], state),
        Screen::Transfer(state) => render_transfer(f, chunks[1], state),
    }
    render_footer(f, chunks[2], hints);

    if let Some(notification) = &app.notification {
        render_notification(f, notification);
    }
}
