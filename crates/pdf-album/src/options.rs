use crate::types::*;

/// Configuration for one compose run.
///
/// Passed explicitly at invocation; the builder never reads shared
/// state mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposeOptions {
    /// How each page's dimensions are chosen
    pub page_policy: PagePolicy,
    /// Fill painted behind every placed image
    pub background: BackgroundColor,
}

impl ComposeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ComposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.background.in_range() {
            return Err(ComposeError::Config(format!(
                "Background channels must be in [0, 1], got ({}, {}, {})",
                self.background.r, self.background.g, self.background.b
            )));
        }

        if let PagePolicy::Fixed {
            size:
                PaperSize::Custom {
                    width_mm,
                    height_mm,
                },
            ..
        } = self.page_policy
            && (width_mm <= 0.0 || height_mm <= 0.0)
        {
            return Err(ComposeError::Config(format!(
                "Custom page size must be positive, got {}x{} mm",
                width_mm, height_mm
            )));
        }

        Ok(())
    }
}
