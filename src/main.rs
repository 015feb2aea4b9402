//! Endfield Codex - operator database TUI

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use endfield_codex::action::Action;
use endfield_codex::catalog::{Catalog, CatalogError};
use endfield_codex::components::{
    CodexDisplay, CodexDisplayProps, Component, OperatorDetail, OperatorDetailProps,
};
use endfield_codex::effect::Effect;
use endfield_codex::filter::FilterCriterion;
use endfield_codex::reducer::reducer;
use endfield_codex::state::AppState;
use endfield_codex::validate::validate;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Endfield Codex - browse operators, factions, elements and tiers
#[derive(Parser, Debug)]
#[command(name = "endfield-codex")]
#[command(about = "An Arknights: Endfield operator database in the terminal")]
struct Args {
    /// Catalog file to load instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Initial roster filter: "all", a rarity such as "6" or "5★", or a class name
    #[arg(long, short)]
    filter: Option<FilterCriterion>,

    /// Validate the catalog, print any issues and exit
    #[arg(long)]
    check: bool,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum CodexComponentId {
    Display,
    Detail,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum CodexContext {
    Main,
    Detail,
}

impl EventRoutingState<CodexComponentId, CodexContext> for AppState {
    fn focused(&self) -> Option<CodexComponentId> {
        if self.detail_open() {
            Some(CodexComponentId::Detail)
        } else {
            Some(CodexComponentId::Display)
        }
    }

    fn modal(&self) -> Option<CodexComponentId> {
        if self.detail_open() {
            Some(CodexComponentId::Detail)
        } else {
            None
        }
    }

    fn binding_context(&self, id: CodexComponentId) -> CodexContext {
        match id {
            CodexComponentId::Display => CodexContext::Main,
            CodexComponentId::Detail => CodexContext::Detail,
        }
    }

    fn default_context(&self) -> CodexContext {
        CodexContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        catalog,
        filter,
        check,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        init_tracing(path)?;
    }

    if check {
        let catalog = load_catalog(catalog.as_deref()).await.map_err(catalog_error)?;
        let issues = validate(&catalog);
        if issues.is_empty() {
            println!(
                "catalog ok: {} operators, {} factions",
                catalog.characters.len(),
                catalog.factions.len()
            );
            return Ok(());
        }
        for issue in &issues {
            eprintln!("{issue}");
        }
        eprintln!("{} issue(s) found", issues.len());
        std::process::exit(1);
    }

    let debug = DebugSession::new(debug_args);

    let state = debug
        .load_state_or_else_async(move || async move {
            let catalog = load_catalog(catalog.as_deref()).await.map_err(catalog_error)?;
            tracing::info!(
                operators = catalog.characters.len(),
                factions = catalog.factions.len(),
                "catalog loaded"
            );
            let state = AppState::new(catalog).map_err(catalog_error)?;
            Ok::<AppState, io::Error>(match filter {
                Some(filter) => state.with_filter(filter),
                None => state,
            })
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

/// Logs go to a file so they never draw over the terminal UI.
fn init_tracing(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "endfield_codex=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

async fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::load(path).await,
        None => Catalog::embedded(),
    }
}

struct CodexUi {
    display: CodexDisplay,
    detail: OperatorDetail,
}

impl CodexUi {
    fn new() -> Self {
        Self {
            display: CodexDisplay::new(),
            detail: OperatorDetail::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<CodexComponentId>,
    ) {
        event_ctx.set_component_area(CodexComponentId::Display, area);

        let props = CodexDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.detail_open(),
        };
        self.display.render(frame, area, props);

        match state.inspected_character() {
            Some(character) => {
                event_ctx
                    .set_component_area(CodexComponentId::Detail, OperatorDetail::modal_area(area));
                let props = OperatorDetailProps {
                    catalog: &state.catalog,
                    character,
                    tab: state.detail_tab,
                    is_focused: render_ctx.is_focused(),
                };
                self.detail.render(frame, area, props);
            }
            None => {
                event_ctx
                    .component_areas
                    .remove(&CodexComponentId::Detail);
            }
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = CodexDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        consumed_or_ignored(actions)
    }

    fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let Some(character) = state.inspected_character() else {
            return HandlerResponse::ignored();
        };
        let props = OperatorDetailProps {
            catalog: &state.catalog,
            character,
            tab: state.detail_tab,
            is_focused: true,
        };
        let actions: Vec<_> = self.detail.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn consumed_or_ignored(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

fn catalog_error(error: CatalogError) -> io::Error {
    io::Error::other(error)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(CodexUi::new()));
    let mut bus: EventBus<AppState, Action, CodexComponentId, CodexContext> = EventBus::new();
    let keybindings: Keybindings<CodexContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(CodexComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(CodexComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

fn handle_effect(effect: Effect, _ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::ReportIssues { issues } => {
            for issue in &issues {
                tracing::warn!(%issue, "catalog issue");
            }
        }
    }
}
