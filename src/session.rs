//! Template lifecycle: compile once, search many times, clear.
//!
//! A [`Session`] is either empty or holds exactly one compiled template.
//! Compiling replaces the held template only on success; searching requires
//! a template; clearing is always allowed.

use crate::search::{find, MatchResult, SearchConfig};
use crate::template::Template;
use crate::util::{MatchError, OpaqueMatchResult};

/// Owner of the current template and the search configuration.
#[derive(Debug, Default)]
pub struct Session {
    template: Option<Template>,
    cfg: SearchConfig,
}

impl Session {
    /// Creates an empty session with the default search configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with a custom search configuration.
    pub fn with_config(cfg: SearchConfig) -> Self {
        Self {
            template: None,
            cfg,
        }
    }

    /// Returns the search configuration.
    pub fn config(&self) -> SearchConfig {
        self.cfg
    }

    /// Compiles a template from an RGBA buffer and makes it current.
    ///
    /// Returns the number of opaque samples. On failure the previously held
    /// template, if any, stays in place.
    pub fn compile(
        &mut self,
        data: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> OpaqueMatchResult<usize> {
        let template = Template::compile(data, width, height, channels)?;
        let count = template.sample_count();
        self.template = Some(template);
        Ok(count)
    }

    /// Installs an already compiled template, returning the one it replaces.
    pub fn set_template(&mut self, template: Template) -> Option<Template> {
        self.template.replace(template)
    }

    /// Searches an RGBA buffer for the current template.
    pub fn search(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> OpaqueMatchResult<MatchResult> {
        let template = self.template.as_ref().ok_or(MatchError::NoTemplate)?;
        find(template, data, width, height, channels, &self.cfg)
    }

    /// Drops the current template. Clearing an empty session is a no-op.
    pub fn clear(&mut self) {
        self.template = None;
    }

    /// Returns true if a template is compiled.
    pub fn is_ready(&self) -> bool {
        self.template.is_some()
    }

    /// Returns the current template, if any.
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }
}
