//! Organizational template feature slice.
//!
//! Owns the `organizational_template` and `organizational_position_template`
//! tables and the replay of a template onto a target structure. Templates
//! are seed-once data; instantiation only reads them.

mod error;
mod instantiate;

pub use crate::error::TemplateError;
pub use crate::instantiate::{ReplayStats, instantiate};

use sigrh_database::Database;
use sigrh_domain::code;
use sigrh_domain::template::{
    OrganizationalPositionTemplate, OrganizationalTemplate, TemplateNode, TemplatePosition,
};
use sigrh_kernel::bootstrap::{BootstrapError, Initializer};
use sigrh_seed::SeedCatalog;
use std::sync::Arc;
use tracing::info;

/// Persists the organizational templates of the seed catalogue, one row per
/// template plus one row per flattened position slot.
#[derive(Debug)]
pub struct TemplateInitializer {
    db: Database,
    catalog: Arc<SeedCatalog>,
}

impl TemplateInitializer {
    #[must_use]
    pub fn new(db: Database, catalog: Arc<SeedCatalog>) -> Self {
        Self { db, catalog }
    }
}

impl Initializer for TemplateInitializer {
    fn name(&self) -> &'static str {
        "templates"
    }

    fn priority(&self) -> u8 {
        20
    }

    fn is_seeded(&self) -> bool {
        !self.db.templates().is_empty()
    }

    fn run(&self) -> Result<u64, BootstrapError> {
        self.db
            .scope("templates", |db| seed_templates(db, &self.catalog))
            .map_err(|err| BootstrapError::initializer("templates", err))
    }
}

fn seed_templates(db: &Database, catalog: &SeedCatalog) -> Result<u64, TemplateError> {
    let mut created = 0u64;

    for document in &catalog.templates {
        let template = OrganizationalTemplate::from(document.clone());
        let slots = flatten_slots(&template);

        info!(
            template = %template.code,
            kind = %template.applies_to,
            slots = slots.len(),
            "Seeding organizational template"
        );

        db.templates().insert(template)?;
        created += 1;
        for slot in slots {
            db.template_slots().insert(slot)?;
            created += 1;
        }
    }

    Ok(created)
}

/// Flattens every position slot of a template into its own addressable row.
///
/// Slot codes compose the template code with the node path
/// (`TPL-GOUV-SG-SC-CSC`), mirroring the codes [`instantiate`] stamps onto
/// created seats.
fn flatten_slots(template: &OrganizationalTemplate) -> Vec<OrganizationalPositionTemplate> {
    fn push_slots(
        scope: &str,
        template_code: &str,
        slots: &[TemplatePosition],
        out: &mut Vec<OrganizationalPositionTemplate>,
    ) {
        for slot in slots {
            out.push(OrganizationalPositionTemplate {
                code: code::child_code(scope, &slot.code),
                template_code: template_code.to_owned(),
                title: slot.title.clone(),
                rank: slot.rank.clone(),
                category: slot.category.clone(),
                corps: slot.corps.clone(),
                grade: slot.grade.clone(),
                nominative: slot.nominative,
                managerial: slot.managerial,
                count: slot.count,
            });
        }
    }

    fn walk(
        scope: &str,
        template_code: &str,
        node: &TemplateNode,
        out: &mut Vec<OrganizationalPositionTemplate>,
    ) {
        let node_scope = code::child_code(scope, &node.code);
        push_slots(&node_scope, template_code, &node.positions, out);
        for sub in &node.sub_services {
            walk(&node_scope, template_code, sub, out);
        }
    }

    let mut out = Vec::new();
    push_slots(&template.code, &template.code, &template.top_level_positions, &mut out);
    for node in &template.sub_structures {
        walk(&template.code, &template.code, node, &mut out);
    }
    out
}
