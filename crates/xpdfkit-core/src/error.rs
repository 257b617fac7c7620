use crate::tool::ToolName;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum XpdfError {
    #[error("{tool} not found in {}", .dir.display())]
    ToolNotInDir { tool: ToolName, dir: PathBuf },

    #[error(
        "unable to locate {0}. Install the Xpdf tools or set XPDFKIT_BIN_DIR \
         to the directory containing them"
    )]
    ToolNotFound(ToolName),

    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: ToolName,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown tool name: {0}")]
    UnknownTool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
