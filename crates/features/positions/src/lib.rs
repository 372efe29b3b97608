//! Position classification feature slice.
//!
//! Walks the persisted structure tree and materializes leadership and
//! counted staff positions: an ordered structural rule table resolves
//! code patterns to singleton leadership seats, while count phrases in
//! descriptions expand into numbered seats. Both go through on-the-fly
//! position archetypes reused across structures by deterministic code.

mod count;
mod error;
mod rules;

pub use crate::count::{CountExtraction, CountPhrase, scan};
pub use crate::error::PositionError;
pub use crate::rules::{ClassifierRules, Predicate, Rule};

use sigrh_database::Database;
use sigrh_domain::code;
use sigrh_domain::position::Position;
use sigrh_domain::structure::Structure;
use sigrh_domain::template::PositionTemplate;
use sigrh_kernel::bootstrap::{BootstrapError, Initializer};
use tracing::{debug, info, warn};

/// Classifies every persisted structure, then seats the Minister.
///
/// Structures that already carry seats (the template-seeded territorial
/// commands) are skipped wholesale; the structural rule pass must not stack
/// a second leadership seat onto them.
///
/// Returns the number of rows created, archetypes included.
///
/// # Errors
/// Returns [`PositionError::Database`] when a row cannot be persisted.
pub fn classify_all(db: &Database, rules: &ClassifierRules) -> Result<u64, PositionError> {
    let mut created = 0u64;

    for structure in db.structures().all() {
        if has_seats(db, &structure.code) {
            debug!(structure = %structure.code, "Structure already has seats, skipping");
            continue;
        }
        classify_structure(db, rules, &structure, &mut created)?;
    }

    minister_seats(db, &mut created)?;
    Ok(created)
}

fn classify_structure(
    db: &Database,
    rules: &ClassifierRules,
    structure: &Structure,
    created: &mut u64,
) -> Result<(), PositionError> {
    if let Some(rule) = rules.match_structure(structure) {
        debug!(structure = %structure.code, rule = rule.name, "Structural rule matched");
        let archetype = ensure_archetype(
            db,
            PositionTemplate::leadership(code::title_code(rule.title), rule.title)
                .applies_to([structure.kind]),
            created,
        )?;
        insert_seat(db, Position::from_archetype(&archetype, &structure.code, None), created)?;
    }

    let Some(description) = &structure.description else {
        return Ok(());
    };

    let extraction = count::scan(description);
    for candidate in &extraction.unrecognized {
        warn!(
            structure = %structure.code,
            phrase = %candidate,
            "Unrecognized role keyword in count phrase, skipping"
        );
    }

    for phrase in &extraction.phrases {
        let archetype = ensure_archetype(
            db,
            PositionTemplate::staff(code::title_code(&phrase.role), &phrase.role)
                .applies_to([structure.kind]),
            created,
        )?;
        for seq in 1..=phrase.count {
            insert_seat(
                db,
                Position::from_archetype(&archetype, &structure.code, Some(seq)),
                created,
            )?;
        }
    }

    Ok(())
}

/// One `Ministre` seat on the ministry root, duplicated onto the root's
/// cabinet structure when it exists. Both seats share one archetype.
fn minister_seats(db: &Database, created: &mut u64) -> Result<(), PositionError> {
    let Some(root) = db.structures().first(Structure::is_root) else {
        warn!("No root structure, minister seat not created");
        return Ok(());
    };

    let archetype = ensure_archetype(
        db,
        PositionTemplate::leadership(code::title_code("Ministre"), "Ministre")
            .applies_to([root.kind]),
        created,
    )?;
    insert_seat(db, Position::from_archetype(&archetype, &root.code, None), created)?;

    let cabinet_code = code::child_code(&root.code, "CABINET");
    if db.structures().contains(&cabinet_code) {
        insert_seat(db, Position::from_archetype(&archetype, &cabinet_code, None), created)?;
    } else {
        debug!(cabinet = %cabinet_code, "No cabinet structure, minister seat not duplicated");
    }

    Ok(())
}

fn has_seats(db: &Database, structure_code: &str) -> bool {
    db.positions().first(|seat| seat.structure_code == structure_code).is_some()
}

/// Inserts the archetype unless a row with the same code already exists, in
/// which case the stored one is reused.
fn ensure_archetype(
    db: &Database,
    archetype: PositionTemplate,
    created: &mut u64,
) -> Result<PositionTemplate, PositionError> {
    if let Some(existing) = db.archetypes().get(&archetype.code) {
        return Ok(existing);
    }
    db.archetypes().insert(archetype.clone())?;
    *created += 1;
    Ok(archetype)
}

fn insert_seat(db: &Database, seat: Position, created: &mut u64) -> Result<(), PositionError> {
    if db.positions().contains(&seat.code) {
        debug!(position = %seat.code, "Position already exists, skipping");
        return Ok(());
    }
    db.positions().insert(seat)?;
    *created += 1;
    Ok(())
}

/// Seeds classified positions over the persisted structure tree.
#[derive(Debug)]
pub struct PositionInitializer {
    db: Database,
    rules: ClassifierRules,
}

impl PositionInitializer {
    /// Creates the initializer with the standard rule set.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db, rules: ClassifierRules::standard() }
    }
}

impl Initializer for PositionInitializer {
    fn name(&self) -> &'static str {
        "positions"
    }

    fn priority(&self) -> u8 {
        40
    }

    fn is_seeded(&self) -> bool {
        // The position table already carries template seats after the
        // geography pass; the archetype table is the classifier's own.
        !self.db.archetypes().is_empty()
    }

    fn run(&self) -> Result<u64, BootstrapError> {
        info!(structures = self.db.structures().count(), "Classifying structures");

        self.db
            .scope("positions", |db| classify_all(db, &self.rules))
            .map_err(|err| BootstrapError::initializer("positions", err))
    }
}
