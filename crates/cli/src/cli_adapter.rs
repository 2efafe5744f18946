use std::sync::Arc;

use tracing::{error, info, instrument};
use wallet_shell_core::adapters::config::store::ConfigStore;
use wallet_shell_core::adapters::shell::headless_backend::HeadlessBackend;
use wallet_shell_core::domain::blockchain::explorer::ExplorerActionKind;
use wallet_shell_core::domain::panel::{PanelView, PanelViewState};
use wallet_shell_core::domain::shell::surface::{SurfaceKind, WindowOptions};
use wallet_shell_core::ports::command_handler::{Command, CommandError, CommandHandler};
use wallet_shell_core::{ChainRef, ExplorerRequest, ShellRouter, SurfaceFactory};

use crate::application_service_factory::ShellContext;

const USAGE: &str = "usage: wallet-shell <open URL | explorer TYPE ID tx|address|token [VALUE] [TOKEN_ID] | resolve ... | dispatch JSON | panel JSON | surface window|overlay|view [IDENTITY] [OPTIONS_JSON] | health>";

pub struct CliAdapter {
    config_path: String,
    store: Arc<ConfigStore>,
    router: Arc<ShellRouter>,
    backend: Arc<HeadlessBackend>,
    surfaces: Arc<SurfaceFactory>,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("config_path", &self.config_path)
            .finish()
    }
}

impl CliAdapter {
    pub fn new(context: ShellContext) -> Self {
        Self {
            config_path: context.config_path,
            store: context.store,
            router: context.router,
            backend: context.backend,
            surfaces: context.surfaces,
        }
    }

    #[instrument]
    pub async fn run(&self, args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
        let command = parse_args(&args).map_err(|e| format!("{e}\n{USAGE}"))?;

        match self.handle(command).await {
            Ok(result) => {
                info!("{}", result);
                println!("{}", result);
                Ok(())
            }
            Err(report) => {
                error!("Command failed: {:?}", report);
                Err(format!("Command failed: {:?}", report).into())
            }
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<Command, CommandError> {
    let arg = |index: usize, what: &str| {
        args.get(index)
            .cloned()
            .ok_or_else(|| CommandError::InvalidCommand {
                details: format!("{what} required"),
            })
    };

    match args.get(1).map(|s| s.as_str()) {
        Some("open") => Ok(Command::OpenExternal {
            url: arg(2, "URL")?,
        }),
        Some(verb @ ("explorer" | "resolve")) => {
            let (chain, request) = parse_explorer_args(&args[2..])?;
            if verb == "explorer" {
                Ok(Command::OpenExplorer { chain, request })
            } else {
                Ok(Command::ResolveExplorer { chain, request })
            }
        }
        Some("dispatch") => Ok(Command::Dispatch {
            payload: arg(2, "Request JSON")?,
        }),
        Some("panel") => Ok(Command::SelectPanel {
            state: arg(2, "View state JSON")?,
        }),
        Some("surface") => parse_surface_args(&args[2..]),
        Some("health") | None => Ok(Command::HealthCheck),
        Some(other) => Err(CommandError::InvalidCommand {
            details: format!("Unknown command '{other}'"),
        }),
    }
}

fn parse_surface_args(args: &[String]) -> Result<Command, CommandError> {
    let invalid = |details: String| CommandError::InvalidCommand { details };

    let (kind, rest) = match args {
        [kind, rest @ ..] if kind == "window" => (SurfaceKind::Window, rest),
        [kind, rest @ ..] if kind == "overlay" => (SurfaceKind::Overlay, rest),
        [kind, identity, rest @ ..] if kind == "view" => (
            SurfaceKind::View {
                identity: identity.clone(),
            },
            rest,
        ),
        [kind] if kind == "view" => return Err(invalid("View identity required".into())),
        [other, ..] => return Err(invalid(format!("Unknown surface kind '{other}'"))),
        [] => return Err(invalid("Surface kind required".into())),
    };

    Ok(Command::CreateSurface {
        kind,
        options: rest.first().cloned(),
    })
}

fn parse_explorer_args(args: &[String]) -> Result<(ChainRef, ExplorerRequest), CommandError> {
    let invalid = |details: String| CommandError::InvalidCommand { details };

    let [chain_type, chain_id, kind, rest @ ..] = args else {
        return Err(invalid("Chain type, chain id and action required".into()));
    };
    let chain_id = chain_id
        .parse::<u64>()
        .map_err(|_| invalid(format!("Chain id '{chain_id}' is not a number")))?;
    let kind = kind
        .parse::<ExplorerActionKind>()
        .map_err(|_| invalid(format!("Unknown explorer action '{kind}'")))?;

    let value = rest.first().cloned();
    let request = ExplorerRequest {
        kind,
        hash: value.clone().filter(|_| kind == ExplorerActionKind::Transaction),
        address: value.filter(|_| kind != ExplorerActionKind::Transaction),
        token_id: rest.get(1).cloned(),
    };

    Ok((ChainRef::new(chain_type.as_str(), chain_id), request))
}

#[async_trait::async_trait]
impl CommandHandler for CliAdapter {
    #[instrument]
    async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError> {
        match command {
            Command::OpenExternal { url } => {
                let gate = self.router.gate();
                if gate.is_allowed(&url) {
                    gate.open_external(&url);
                    Ok(format!("Opened {url}"))
                } else {
                    Ok(format!("Dropped {url} (not allow-listed)"))
                }
            }
            Command::OpenExplorer { chain, request } => {
                self.router
                    .explorer()
                    .open_block_explorer(&chain, &request)
                    .await;
                Ok(format!("Explorer request for {chain} handled"))
            }
            Command::ResolveExplorer { chain, request } => {
                match self.router.explorer().resolve(&chain, &request).await {
                    Some(url) => Ok(url),
                    None => Err(CommandError::ExecutionFailed {
                        details: format!("No explorer configured for {chain}"),
                    }
                    .into()),
                }
            }
            Command::Dispatch { payload } => {
                self.router
                    .dispatch(&payload)
                    .await
                    .map_err(|e| CommandError::ExecutionFailed {
                        details: format!("Failed to dispatch request: {:?}", e),
                    })?;
                Ok("Request dispatched".to_string())
            }
            Command::SelectPanel { state } => {
                let state: PanelViewState =
                    serde_json::from_str(&state).map_err(|e| CommandError::InvalidCommand {
                        details: format!("Invalid view state: {e}"),
                    })?;
                Ok(PanelView::select(&state).to_string())
            }
            Command::CreateSurface { kind, options } => {
                let options = options
                    .map(|json| serde_json::from_str::<WindowOptions>(&json))
                    .transpose()
                    .map_err(|e| CommandError::InvalidCommand {
                        details: format!("Invalid surface options: {e}"),
                    })?;
                let name = format!("cli-{kind}");
                let handle = self
                    .surfaces
                    .create(&name, kind, options, None)
                    .map_err(|e| CommandError::ExecutionFailed {
                        details: format!("Failed to create surface: {:?}", e),
                    })?;
                let spec = self.backend.spec(&handle).ok_or_else(|| {
                    CommandError::ExecutionFailed {
                        details: format!("Surface {} was not recorded", handle.id),
                    }
                })?;
                serde_json::to_string_pretty(&spec).map_err(|e| {
                    CommandError::ExecutionFailed {
                        details: format!("Failed to render surface: {e}"),
                    }
                    .into()
                })
            }
            Command::HealthCheck => {
                let config = self.store.snapshot();
                let networks: usize = config.main.networks.values().map(|ids| ids.len()).sum();
                let explorers = config
                    .main
                    .networks
                    .values()
                    .flat_map(|ids| ids.values())
                    .filter(|network| network.explorer.is_some())
                    .count();
                Ok(format!(
                    "🟢 Wallet Shell - Healthy\n\
                     Config: {}\n\
                     Preload bridge: {}\n\
                     Networks configured: {} ({} with explorer)",
                    self.config_path,
                    config.shell.preload_path().display(),
                    networks,
                    explorers
                ))
            }
        }
    }
}
