//! [`Record`] implementations wiring the domain entities to their tables.

use crate::table::Record;
use sigrh_domain::corps::{CorpsMetier, Grade};
use sigrh_domain::geography::{Arrondissement, Department, Region};
use sigrh_domain::position::Position;
use sigrh_domain::structure::Structure;
use sigrh_domain::template::{
    OrganizationalPositionTemplate, OrganizationalTemplate, PositionTemplate,
};

impl Record for Structure {
    const TABLE: &'static str = "structure";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for OrganizationalTemplate {
    const TABLE: &'static str = "organizational_template";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for OrganizationalPositionTemplate {
    const TABLE: &'static str = "organizational_position_template";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for PositionTemplate {
    const TABLE: &'static str = "position_template";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for Position {
    const TABLE: &'static str = "position";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for Region {
    const TABLE: &'static str = "region";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for Department {
    const TABLE: &'static str = "department";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for Arrondissement {
    const TABLE: &'static str = "arrondissement";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for CorpsMetier {
    const TABLE: &'static str = "corps_metier";

    fn code(&self) -> &str {
        &self.code
    }
}

impl Record for Grade {
    const TABLE: &'static str = "grade";

    fn code(&self) -> &str {
        &self.code
    }
}
