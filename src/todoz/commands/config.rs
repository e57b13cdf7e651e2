use crate::commands::{CmdResult, TodozPaths};
use crate::config::TodozConfig;
use crate::error::Result;
use crate::model::Scope;
use crate::notice::Notice;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    Show,
    Get(String),
    Set(String, String),
}

/// Reads or changes a scope's config. Every successful action reports the
/// task file the scope now resolves to; a bad key or value comes back as a
/// rejected notice and leaves the config on disk alone.
pub fn run(paths: &TodozPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope);
    let mut config = TodozConfig::load(&dir)?;
    let mut result = CmdResult::default();

    let outcome = match &action {
        ConfigAction::Show => Ok(None),
        ConfigAction::Get(key) => config.get(key).map(|value| Some(Notice::info(value))),
        ConfigAction::Set(key, value) => config.set(key, value).map(|()| None),
    };

    match outcome {
        Ok(Some(notice)) => result.add_notice(notice),
        Ok(None) => {}
        Err(e) => {
            result.add_notice(Notice::from(&e));
            return Ok(result);
        }
    }

    let task_file = dir.join(&config.file_name);
    if let ConfigAction::Set(..) = action {
        config.save(&dir)?;
        result.add_notice(Notice::done(format!(
            "Todos now live in {}",
            task_file.display()
        )));
    }
    Ok(result.with_task_file(task_file).with_config(config))
}
