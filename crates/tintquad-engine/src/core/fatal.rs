use crate::render::ShaderError;

use super::alert::alert;

/// Unrecoverable startup failure.
///
/// Both variants end the run after [`report_fatal`] has shown them.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// No surface, adapter or device could be obtained.
    #[error("Unable to initialize the graphics context. Your platform may not support it.\n\n{0:#}")]
    ContextUnavailable(anyhow::Error),

    /// The shader program failed to compile or link.
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

impl FatalError {
    pub fn title(&self) -> &'static str {
        match self {
            FatalError::ContextUnavailable(_) => "Graphics unavailable",
            FatalError::Shader(ShaderError::Compile { .. }) => "Shader compilation failed",
            FatalError::Shader(ShaderError::Link { .. }) => "Shader program link failed",
        }
    }
}

/// Logs `err` and shows it in a blocking alert.
pub fn report_fatal(err: &FatalError) {
    log::error!("{}: {err}", err.title());
    alert(err.title(), &err.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShaderStage;

    #[test]
    fn context_error_includes_cause_chain() {
        let cause = anyhow::anyhow!("no adapter").context("failed to create wgpu surface");
        let err = FatalError::ContextUnavailable(cause);
        let text = err.to_string();
        assert!(text.starts_with("Unable to initialize the graphics context"));
        assert!(text.contains("failed to create wgpu surface"));
        assert!(text.contains("no adapter"));
        assert_eq!(err.title(), "Graphics unavailable");
    }

    #[test]
    fn shader_errors_pass_through() {
        let err: FatalError = ShaderError::Compile {
            label: "quad fragment".into(),
            stage: ShaderStage::Fragment,
            log: "expected `;`".into(),
        }
        .into();
        assert_eq!(err.title(), "Shader compilation failed");
        assert!(err.to_string().contains("expected `;`"));
    }
}
