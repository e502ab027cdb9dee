use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::domain::sample;
use crate::utils::build_info;

pub(super) fn register(registry: &mut CommandRegistry) {
    registry.register(
        "config",
        "config [show|set <key> <value>]",
        "View and change saved preferences",
        cmd_config,
    );
    registry.register("version", "version", "Show build metadata", cmd_version);
    registry.register("help", "help [command]", "Show available commands", cmd_help);
    registry.register("exit", "exit", "Leave HemoLink", cmd_exit);
}

fn cmd_config(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None | Some("show") => {
            output::section("Configuration");
            for (key, value) in context.config.entries() {
                output::print(output::MessageKind::Plain, format!("  {:<20} {}", key, value));
            }
            output::print(
                output::MessageKind::Plain,
                format!("  Stored in {}", context.config_path().display()),
            );
            Ok(())
        }
        Some("set") => {
            if args.len() < 2 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <key> <value>".into(),
                ));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            context
                .config
                .set(key, &value)
                .map_err(CommandError::InvalidArguments)?;
            context.persist_config()?;
            apply_live_setting(context, key);
            output::success(format!("Saved `{key}`."));
            if matches!(key, "directory_path" | "assistant_command") {
                output::hint("This setting takes effect the next time HemoLink starts.");
            }
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`"
        ))),
    }
}

fn apply_live_setting(context: &mut ShellContext<'_>, key: &str) {
    match key {
        "donor_name" => {
            context.donor.name = context
                .config
                .donor_name
                .clone()
                .unwrap_or_else(|| sample::donor().name);
        }
        "ui_color_enabled" => context.apply_output_preferences(),
        _ => {}
    }
}

fn cmd_version(_context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("HemoLink {}", meta.version));
    output::print(
        output::MessageKind::Plain,
        format!("  Build hash : {} ({})", meta.git_hash, meta.git_status),
    );
    output::print(output::MessageKind::Plain, format!("  Built at   : {}", meta.timestamp));
    output::print(output::MessageKind::Plain, format!("  Target     : {}", meta.target));
    output::print(output::MessageKind::Plain, format!("  Profile    : {}", meta.profile));
    output::print(output::MessageKind::Plain, format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext<'_>, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry().get(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }
    help::print_overview(context.registry());
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext<'_>, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
