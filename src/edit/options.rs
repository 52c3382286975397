//! Options controlling how a SWF file is patched.

use crate::codec::ZlibEncoderOptions;
use crate::crypto::Password;

/// Options for inserting the telemetry tag.
#[derive(Clone)]
pub struct PatchOptions {
    /// Password required to view advanced telemetry, if any.
    pub password: Option<Password>,
    /// Whether a missing `FileAttributes` tag is an error.
    ///
    /// When `false`, a file without `FileAttributes` is reported as not
    /// patched and left untouched.
    pub require_file_attributes: bool,
    /// zlib level used when re-encoding `CWS` files (0-9).
    pub level: u32,
    /// Build the patched file but do not write it.
    pub dry_run: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            password: None,
            require_file_attributes: true,
            level: 6,
            dry_run: false,
        }
    }
}

impl std::fmt::Debug for PatchOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatchOptions")
            .field("has_password", &self.password.is_some())
            .field("require_file_attributes", &self.require_file_attributes)
            .field("level", &self.level)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl PatchOptions {
    /// Creates new patch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the password whose digest is embedded in the tag.
    pub fn password(mut self, password: impl Into<Password>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets or clears the password.
    pub fn password_opt(mut self, password: Option<Password>) -> Self {
        self.password = password;
        self
    }

    /// Sets whether a missing `FileAttributes` tag fails the run.
    pub fn require_file_attributes(mut self, require: bool) -> Self {
        self.require_file_attributes = require;
        self
    }

    /// Sets the zlib compression level (strict validation).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCompressionLevel`] if level is greater than 9.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swf_telemetry::PatchOptions;
    ///
    /// let opts = PatchOptions::new().level(9)?;
    /// assert_eq!(opts.level, 9);
    ///
    /// assert!(PatchOptions::new().level(15).is_err());
    /// # Ok::<(), swf_telemetry::Error>(())
    /// ```
    ///
    /// [`Error::InvalidCompressionLevel`]: crate::Error::InvalidCompressionLevel
    pub fn level(mut self, level: u32) -> crate::Result<Self> {
        if level > 9 {
            return Err(crate::Error::InvalidCompressionLevel { level });
        }
        self.level = level;
        Ok(self)
    }

    /// Sets the zlib compression level, clamping values above 9.
    pub fn level_clamped(mut self, level: u32) -> Self {
        self.level = level.min(9);
        self
    }

    /// Sets dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the encoder options for re-compressing the body.
    pub fn encoder_options(&self) -> ZlibEncoderOptions {
        ZlibEncoderOptions::with_level(self.level)
    }
}
