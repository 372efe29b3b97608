use crate::error::TemplateError;
use sigrh_database::Database;
use sigrh_domain::code;
use sigrh_domain::position::Position;
use sigrh_domain::structure::Structure;
use sigrh_domain::template::{TemplateNode, TemplatePosition};
use tracing::debug;

/// Rows created while replaying a template onto one target structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub structures: u64,
    pub positions: u64,
}

impl ReplayStats {
    /// Total rows created by the replay.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.structures + self.positions
    }
}

/// Replays the organizational template matching `target.kind` onto `target`.
///
/// Returns `Ok(None)` when no persisted template applies to the target's
/// kind, which is the normal case for central services. Sub-structure codes
/// are composed as `<targetCode>-<subCode>`; seats reference their flattened
/// slot code (`TPL-GOUV-CAB-CC`). Codes already present in the store are
/// skipped with a debug log, so a replay over a partially seeded tree only
/// fills the gaps.
///
/// # Errors
/// Returns [`TemplateError::Database`] when an insertion fails for a reason
/// other than an existing code.
pub fn instantiate(
    db: &Database,
    target: &Structure,
) -> Result<Option<ReplayStats>, TemplateError> {
    let Some(template) = db.templates().first(|t| t.applies_to == target.kind) else {
        debug!(structure = %target.code, kind = %target.kind, "No template applies, skipping");
        return Ok(None);
    };

    let mut stats = ReplayStats::default();
    create_seats(db, &target.code, &template.code, &template.top_level_positions, &mut stats)?;
    for node in &template.sub_structures {
        replay_node(db, node, &target.code, &template.code, &mut stats)?;
    }

    debug!(
        structure = %target.code,
        template = %template.code,
        structures = stats.structures,
        positions = stats.positions,
        "Template replayed"
    );
    Ok(Some(stats))
}

/// Creates one sub-structure and everything below it.
///
/// `scope` is the template-relative slot prefix, extended at every level so
/// that seats of nested services reference distinct slot codes.
fn replay_node(
    db: &Database,
    node: &TemplateNode,
    parent_code: &str,
    scope: &str,
    stats: &mut ReplayStats,
) -> Result<(), TemplateError> {
    let structure_code = code::child_code(parent_code, &node.code);
    let node_scope = code::child_code(scope, &node.code);

    if db.structures().contains(&structure_code) {
        debug!(structure = %structure_code, "Structure already exists, skipping");
    } else {
        let structure = Structure::new(&structure_code, &node.name, node.kind)
            .with_description(node.description.clone())
            .with_parent(parent_code);
        db.structures().insert(structure)?;
        stats.structures += 1;
    }

    create_seats(db, &structure_code, &node_scope, &node.positions, stats)?;
    for sub in &node.sub_services {
        replay_node(db, sub, &structure_code, &node_scope, stats)?;
    }
    Ok(())
}

/// Creates the seats of one slot list, expanding multi-headcount slots into
/// numbered seats.
fn create_seats(
    db: &Database,
    structure_code: &str,
    scope: &str,
    slots: &[TemplatePosition],
    stats: &mut ReplayStats,
) -> Result<(), TemplateError> {
    for slot in slots {
        let slot_code = code::child_code(scope, &slot.code);
        if slot.count > 1 {
            for seq in 1..=slot.count {
                insert_seat(db, Position::from_slot(slot, &slot_code, structure_code, Some(seq)), stats)?;
            }
        } else {
            insert_seat(db, Position::from_slot(slot, &slot_code, structure_code, None), stats)?;
        }
    }
    Ok(())
}

fn insert_seat(db: &Database, seat: Position, stats: &mut ReplayStats) -> Result<(), TemplateError> {
    if db.positions().contains(&seat.code) {
        debug!(position = %seat.code, "Position already exists, skipping");
        return Ok(());
    }
    db.positions().insert(seat)?;
    stats.positions += 1;
    Ok(())
}
