use crate::{
    error::Error,
    extension::TomlTableExt,
    state::{Env, State},
};
use std::{io, sync::OnceLock};
use tracing::Level;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
};

/// Initializes the global tracing subscriber from the `[tracing]` table of the config.
///
/// Supported keys are `format` (`pretty`, `compact`, `json` or `full`), `level`,
/// `filter`, `ansi`, `display-target`, `display-filename`, `display-line-number`
/// and `flatten-event`. Once a call has got past config parsing,
/// later calls have no effect.
pub fn init_tracing(state: &State) -> Result<(), Error> {
    let app_env = state.env();
    let in_dev_mode = app_env.is_dev();
    let mut event_format = if in_dev_mode { "pretty" } else { "json" };
    let mut level_filter = if in_dev_mode {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let mut stdout_max_level = if in_dev_mode {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let mut env_filter = if in_dev_mode {
        "info,timecheck_core=debug"
    } else {
        "warn,timecheck_core=info"
    };

    let mut ansi_terminal = true;
    let mut display_target = true;
    let mut display_filename = in_dev_mode;
    let mut display_line_number = in_dev_mode;
    let mut flatten_event = false;
    if let Some(config) = state.config().get_table("tracing") {
        if let Some(format) = config.get_str("format") {
            event_format = format;
        }
        if let Some(level) = config.get_str("level") {
            stdout_max_level = level
                .parse()
                .map_err(|err| Error::with_source("fail to parse the level", err))?;
            level_filter = level
                .parse()
                .map_err(|err| Error::with_source("fail to parse the level filter", err))?;
        }
        if let Some(filter) = config.get_str("filter") {
            env_filter = filter;
        }
        ansi_terminal = config.get_bool("ansi").unwrap_or(true);
        display_target = config.get_bool("display-target").unwrap_or(true);
        display_filename = config.get_bool("display-filename").unwrap_or(in_dev_mode);
        display_line_number = config
            .get_bool("display-line-number")
            .unwrap_or(in_dev_mode);
        flatten_event = config.get_bool("flatten-event").unwrap_or(false);
    }

    // Format layer
    let stdout = io::stdout.with_max_level(stdout_max_level);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(ansi_terminal)
        .with_target(display_target)
        .with_file(display_filename)
        .with_line_number(display_line_number)
        .with_writer(stdout);

    let env_filter_layer = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .parse(env_filter)
        .map_err(|err| Error::with_source("fail to parse the env filter", err))?;
    if TRACING_ENV.set(app_env).is_err() {
        tracing::warn!("tracing subscriber has already been initialized");
        return Ok(());
    }

    let subscriber = tracing_subscriber::registry().with(env_filter_layer);
    match event_format {
        "compact" => {
            let compact_fmt_layer = fmt_layer.compact();
            let subscriber = subscriber.with(compact_fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!(
                    "fail to set the default subscriber with a `Compact` formatter: {err}"
                );
            }
        }
        "json" => {
            let json_fmt_layer = fmt_layer
                .json()
                .flatten_event(flatten_event)
                .with_current_span(true);
            let subscriber = subscriber.with(json_fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!("fail to set the default subscriber with a `Json` formatter: {err}");
            }
        }
        "pretty" => {
            let pretty_fmt_layer = fmt_layer.pretty();
            let subscriber = subscriber.with(pretty_fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!(
                    "fail to set the default subscriber with a `Pretty` formatter: {err}"
                );
            }
        }
        _ => {
            let subscriber = subscriber.with(fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!("fail to set the default subscriber with a `Full` formatter: {err}");
            }
        }
    }
    Ok(())
}

/// Environment the tracing subscriber was initialized for.
static TRACING_ENV: OnceLock<Env> = OnceLock::new();

#[cfg(test)]
mod tests {
    use super::{TRACING_ENV, init_tracing};
    use crate::state::{Env, State};

    #[test]
    fn it_rejects_invalid_level() {
        let state = State::with_config_str(Env::Dev, "[tracing]\nlevel = \"loud\"").unwrap();
        assert!(init_tracing(&state).is_err());
    }

    #[test]
    fn it_initializes_once() {
        let state = State::with_config_str(
            Env::Prod,
            "[tracing]\nformat = \"compact\"\nlevel = \"warn\"\nansi = false",
        )
        .unwrap();
        assert!(init_tracing(&state).is_ok());
        assert_eq!(TRACING_ENV.get(), Some(&Env::Prod));

        let state = State::new(Env::Dev);
        assert!(init_tracing(&state).is_ok());
        assert_eq!(TRACING_ENV.get(), Some(&Env::Prod));
    }
}
