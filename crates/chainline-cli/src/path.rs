//! Stream path resolution.

use std::path::PathBuf;

use chainline_core::Config;

/// Resolves the stream file path and stream name for a command.
///
/// With an explicit path, the stream name is the file stem (the header
/// check on open still decides whether the file really stores it). With
/// no path, the name comes from the injected environment configuration
/// and the file lives in the working directory as `<name>.ael`.
pub fn resolve_stream(
    stream: Option<String>,
) -> Result<(PathBuf, String), Box<dyn std::error::Error>> {
    match stream {
        Some(path) => {
            let path = PathBuf::from(path);
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| format!("invalid stream path: {}", path.display()))?
                .to_string();
            Ok((path, name))
        }
        None => {
            let config = Config::from_env()
                .map_err(|e| format!("no stream path given and {}", e))?;
            let name = config.stream_name();
            let path = PathBuf::from(format!("{}.ael", name));
            Ok((path, name))
        }
    }
}

/// Resolves a stream path that must already exist.
pub fn resolve_existing_stream(
    stream: Option<String>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let (path, _) = resolve_stream(stream)?;
    if !path.exists() {
        return Err(format!("stream file not found: {}", path.display()).into());
    }
    Ok(path)
}
