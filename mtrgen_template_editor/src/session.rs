// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! # Template Session
//!
//! A session owns the live template and everything needed to change it: an
//! id generator, the defaults for new nodes and a revision counter. Every
//! successful edit replaces the whole tree and notifies the listeners.

use crate::assign::assign_ids;
use crate::edit::{Edit, EditContext};
use crate::error::EditorError;
use crate::ids::{IdGenerator, UlidIds};
use mtrgen_template_common::TemplateDefaults;
use mtrgen_template_schema::{ExportMode, Template, convert};
use tracing::{debug, info};

/// Called with the new tree after each accepted change
pub type ChangeListener = Box<dyn FnMut(&Template)>;

pub struct TemplateSession {
    template: Template,
    ids: Box<dyn IdGenerator>,
    defaults: TemplateDefaults,
    revision: u64,
    listeners: Vec<ChangeListener>,
}

impl TemplateSession {
    /// Starts from an empty template named after the defaults.
    pub fn new(defaults: TemplateDefaults) -> Self {
        let template = Template::new(
            defaults.name.clone(),
            defaults.filename.clone(),
            defaults.path.clone(),
        );
        Self::with_ids(template, Box::new(UlidIds), defaults)
    }

    /// Wraps an existing tree. Entries without a unique id receive one.
    pub fn with_ids(mut template: Template, mut ids: Box<dyn IdGenerator>, defaults: TemplateDefaults) -> Self {
        assign_ids(&mut template, ids.as_mut());
        Self {
            template,
            ids,
            defaults,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Parses export or editing JSON and prepares it for editing.
    pub fn load(json: &str, defaults: TemplateDefaults) -> Result<Self, EditorError> {
        let template = convert::deserialize(json)?;
        info!(name = %template.name, "loaded template");
        Ok(Self::with_ids(template, Box::new(UlidIds), defaults))
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn into_template(self) -> Template {
        self.template
    }

    pub fn defaults(&self) -> &TemplateDefaults {
        &self.defaults
    }

    /// Number of accepted edits since the session started
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn on_change(&mut self, listener: impl FnMut(&Template) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn apply(&mut self, edit: &Edit) -> Result<(), EditorError> {
        let mut ctx = EditContext::new(self.ids.as_mut(), &self.defaults);
        let next = edit.apply(&self.template, &mut ctx)?;
        self.commit(next, 1);
        Ok(())
    }

    /// Applies a script of edits. Either every edit succeeds and the session
    /// moves to the final tree, or nothing changes.
    pub fn apply_all(&mut self, edits: &[Edit]) -> Result<(), EditorError> {
        if edits.is_empty() {
            return Ok(());
        }

        let mut ctx = EditContext::new(self.ids.as_mut(), &self.defaults);
        let mut next = self.template.clone();
        for (index, edit) in edits.iter().enumerate() {
            next = edit
                .apply(&next, &mut ctx)
                .map_err(|source| EditorError::Script { index, source })?;
        }
        self.commit(next, edits.len() as u64);
        Ok(())
    }

    /// Serializes the current tree for the generator.
    pub fn export(&self, mode: ExportMode) -> Result<String, EditorError> {
        Ok(convert::serialize_with(&self.template, mode)?)
    }

    /// Serializes the current tree with its ids, for resuming later.
    pub fn to_editing_json(&self) -> Result<String, EditorError> {
        Ok(convert::to_editing_json(&self.template)?)
    }

    fn commit(&mut self, next: Template, edits: u64) {
        self.template = next;
        self.revision += edits;
        debug!(revision = self.revision, "template changed");
        for listener in &mut self.listeners {
            listener(&self.template);
        }
    }
}
