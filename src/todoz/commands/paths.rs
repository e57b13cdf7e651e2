use crate::commands::{CmdResult, TodozPaths};
use crate::error::Result;
use crate::model::Scope;
use crate::notice::Notice;

pub fn run(paths: &TodozPaths, scope: Scope) -> Result<CmdResult> {
    let path = paths.task_file(scope)?;
    let mut result = CmdResult::default();
    if !path.exists() {
        result.add_notice(Notice::info(
            "No todos saved yet; the file is created on first run.",
        ));
    }
    Ok(result.with_task_file(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TodozConfig;

    fn paths_in(dir: &std::path::Path) -> TodozPaths {
        TodozPaths {
            project: dir.join("project"),
            global: dir.join("global"),
        }
    }

    #[test]
    fn defaults_to_todo_txt_in_scope_dir() {
        let temp = tempfile::tempdir().unwrap();
        let paths = paths_in(temp.path());

        let result = run(&paths, Scope::Project).unwrap();
        assert_eq!(
            result.task_file,
            Some(temp.path().join("project").join("todo.txt"))
        );
        assert_eq!(result.notices.len(), 1);

        let global = run(&paths, Scope::Global).unwrap();
        assert_eq!(
            global.task_file,
            Some(temp.path().join("global").join("todo.txt"))
        );
    }

    #[test]
    fn follows_configured_file_name() {
        let temp = tempfile::tempdir().unwrap();
        let paths = paths_in(temp.path());
        let mut config = TodozConfig::default();
        config.set("file-name", "chores.txt").unwrap();
        config.save(paths.scope_dir(Scope::Project)).unwrap();
        std::fs::write(temp.path().join("project").join("chores.txt"), "x").unwrap();

        let result = run(&paths, Scope::Project).unwrap();
        assert_eq!(
            result.task_file,
            Some(temp.path().join("project").join("chores.txt"))
        );
        assert!(result.notices.is_empty());
    }
}
