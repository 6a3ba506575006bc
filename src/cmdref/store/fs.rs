use super::CommandStore;
use crate::error::{CmdrefError, Result};
use crate::model::Command;
use directories::BaseDirs;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const CMDREF_DIR_NAME: &str = "cmdref";
pub const CMDREF_FILE_NAME: &str = "cmdref.json";

pub struct FileStore {
    path: PathBuf,
    pretty_json: bool,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            pretty_json: false,
        }
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    fn encode(&self, commands: &[Command]) -> Result<String> {
        let content = if self.pretty_json {
            serde_json::to_string_pretty(commands)
        } else {
            serde_json::to_string(commands)
        };
        content.map_err(CmdrefError::Serialization)
    }
}

/// `<user-config-dir>/cmdref`, created if it does not exist yet.
pub fn default_dir() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or_else(|| {
        CmdrefError::Store("Could not determine the user config directory".to_string())
    })?;
    let dir = base.config_dir().join(CMDREF_DIR_NAME);
    ensure_dir(&dir)?;
    Ok(dir)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path).map_err(CmdrefError::Io)
}

/// Decodes a command collection. Blank input and JSON `null` decode to nothing.
/// Every entry needs a non-blank name.
pub fn decode_commands(content: &str) -> Result<Vec<Command>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let commands: Option<Vec<Command>> =
        serde_json::from_str(content).map_err(CmdrefError::Serialization)?;
    let commands = commands.unwrap_or_default();
    if let Some(i) = commands.iter().position(|c| c.name.trim().is_empty()) {
        return Err(CmdrefError::Store(format!("entry {} has an empty name", i)));
    }
    Ok(commands)
}

/// A temp file next to its destination. Removed on drop unless it was renamed into place.
struct PendingWrite {
    tmp_path: PathBuf,
    committed: bool,
}

impl PendingWrite {
    fn create(target: &Path, content: &str) -> Result<Self> {
        let dir = target.parent().unwrap_or_else(|| Path::new("."));
        let pending = Self {
            tmp_path: dir.join(format!(".{}-{}.tmp", CMDREF_DIR_NAME, Uuid::new_v4())),
            committed: false,
        };

        let mut file = File::create(&pending.tmp_path).map_err(CmdrefError::Io)?;
        file.write_all(content.as_bytes()).map_err(CmdrefError::Io)?;
        file.sync_all().map_err(CmdrefError::Io)?;
        Ok(pending)
    }

    fn commit(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.tmp_path, target).map_err(CmdrefError::Io)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingWrite {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp_path);
        }
    }
}

impl CommandStore for FileStore {
    fn load(&self) -> Result<Vec<Command>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no commands file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CmdrefError::Io)?;
        let commands = decode_commands(&content)?;
        debug!(path = %self.path.display(), count = commands.len(), "loaded commands");
        Ok(commands)
    }

    fn load_external(&self, path: &Path) -> Result<Vec<Command>> {
        let content = fs::read_to_string(path).map_err(CmdrefError::Io)?;
        let commands = decode_commands(&content)?;
        debug!(path = %path.display(), count = commands.len(), "read import source");
        Ok(commands)
    }

    fn save(&mut self, commands: &[Command]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent)?;
            }
        }

        let content = self.encode(commands)?;
        PendingWrite::create(&self.path, &content)?.commit(&self.path)?;
        debug!(path = %self.path.display(), count = commands.len(), "saved commands");
        Ok(())
    }

    fn file_path(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_decodes_empty() {
        assert!(decode_commands("").unwrap().is_empty());
        assert!(decode_commands("  \n").unwrap().is_empty());
        assert!(decode_commands("null").unwrap().is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let content = r#"[
            {"name":"ok","command":"x","platform":"p","description":"d"},
            {"name":"","command":"x","platform":"p","description":"d"}
        ]"#;
        let err = decode_commands(content).unwrap_err();
        assert!(matches!(err, CmdrefError::Store(ref m) if m == "entry 1 has an empty name"));
        assert!(err.is_persistence());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = decode_commands(r#"[{"name":"  ","command":"x"}]"#).unwrap_err();
        assert!(matches!(err, CmdrefError::Store(_)));
    }

    #[test]
    fn missing_optional_fields_decode_empty() {
        let commands = decode_commands(r#"[{"name":"a","command":"ls"}]"#).unwrap();
        assert_eq!(commands, vec![Command::new("a", "ls", "", "")]);
    }

    #[test]
    fn missing_name_is_serialization_error() {
        let err = decode_commands(r#"[{"command":"ls"}]"#).unwrap_err();
        assert!(matches!(err, CmdrefError::Serialization(_)));
    }

    #[test]
    fn malformed_content_is_serialization_error() {
        let err = decode_commands("{not json").unwrap_err();
        assert!(matches!(err, CmdrefError::Serialization(_)));
        assert!(err.is_persistence());
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        let err = decode_commands(r#"{"name":"a"}"#).unwrap_err();
        assert!(matches!(err, CmdrefError::Serialization(_)));
    }

    #[test]
    fn compact_by_default() {
        let store = FileStore::new(PathBuf::from("unused.json"));
        let encoded = store.encode(&[Command::new("a", "b", "c", "d")]).unwrap();
        assert!(!encoded.contains('\n'));
    }

    #[test]
    fn pretty_when_configured() {
        let store = FileStore::new(PathBuf::from("unused.json")).with_pretty_json(true);
        let encoded = store.encode(&[Command::new("a", "b", "c", "d")]).unwrap();
        assert!(encoded.contains('\n'));
    }
}
