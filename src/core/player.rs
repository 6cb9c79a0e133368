//! Player roles, their positions and the turn rotation.
//!
//! ## Role
//!
//! Each player takes one of six fixed roles. A role carries a piece color and
//! the terrain where its piece starts.
//!
//! ## PlayerState
//!
//! Tracks the terrain each active role stands on and the turn order, a
//! permutation of the active roles fixed at setup. A single rotating index
//! selects whose turn it is.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::Color;
use super::error::{MoveError, SetupError};

/// Minimum number of players in a session.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players in a session.
pub const MAX_PLAYERS: usize = 4;

/// Inline storage for the active roles of a session.
pub type RoleList = SmallVec<[Role; MAX_PLAYERS]>;

/// One of the six adventurer roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Piloto,
    Engenheiro,
    Explorador,
    Mergulhador,
    Mensageiro,
    Navegador,
}

impl Role {
    /// All roles in catalog order.
    pub const ALL: [Role; 6] = [
        Role::Piloto,
        Role::Engenheiro,
        Role::Explorador,
        Role::Mergulhador,
        Role::Mensageiro,
        Role::Navegador,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Piloto => "Piloto",
            Role::Engenheiro => "Engenheiro",
            Role::Explorador => "Explorador",
            Role::Mergulhador => "Mergulhador",
            Role::Mensageiro => "Mensageiro",
            Role::Navegador => "Navegador",
        }
    }

    /// Piece color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Role::Piloto => Color(0x00_00_FF),
            Role::Engenheiro => Color(0xFF_00_00),
            Role::Explorador => Color(0x00_80_00),
            Role::Mergulhador => Color(0x00_00_00),
            Role::Mensageiro => Color(0x50_50_50),
            Role::Navegador => Color(0xDA_A5_20),
        }
    }

    /// Terrain where this role's piece starts.
    #[must_use]
    pub const fn starting_terrain(self) -> &'static str {
        match self {
            Role::Piloto => "Heliponto",
            Role::Engenheiro => "Portal de Bronze",
            Role::Explorador => "Portal de Cobre",
            Role::Mergulhador => "Portal de Ferro",
            Role::Mensageiro => "Portal de Prata",
            Role::Navegador => "Portal de Ouro",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a role name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// Active roles and the order in which they take turns.
///
/// Produced by the identity assigner, or supplied directly when a session
/// needs a fixed order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Roles in play, in selection order.
    pub active: RoleList,
    /// Permutation of `active` giving the turn sequence.
    pub turn_order: RoleList,
}

impl RoleAssignment {
    /// Use the same sequence for selection and turn order.
    #[must_use]
    pub fn fixed(roles: &[Role]) -> Self {
        Self {
            active: SmallVec::from_slice(roles),
            turn_order: SmallVec::from_slice(roles),
        }
    }

    /// Number of roles in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// True when no role is in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Check for 2-4 distinct roles and a turn order that is a permutation
    /// of them.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.len()) {
            return Err(SetupError::InvalidPlayerCount {
                got: self.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let mut seen = FxHashSet::default();
        for &role in &self.active {
            if !seen.insert(role) {
                return Err(SetupError::DuplicateRole(role));
            }
        }

        let mut order = FxHashSet::default();
        for &role in &self.turn_order {
            if !order.insert(role) {
                return Err(SetupError::DuplicateRole(role));
            }
        }
        if order != seen {
            return Err(SetupError::TurnOrderMismatch);
        }
        Ok(())
    }
}

/// Positions of the active roles and the rotating turn index.
///
/// Deserialization applies the same checks as [`PlayerState::new`] and also
/// requires an in-range turn index and exactly one position per active role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerStateRecord")]
pub struct PlayerState {
    active: RoleList,
    turn_order: RoleList,
    turn_index: usize,
    positions: FxHashMap<Role, String>,
}

impl PlayerState {
    /// Place every active role on its starting terrain, first role in
    /// `turn_order` to act.
    ///
    /// Fails unless the assignment passes [`RoleAssignment::validate`].
    pub fn new(assignment: RoleAssignment) -> Result<Self, SetupError> {
        assignment.validate()?;

        let positions = assignment
            .active
            .iter()
            .map(|&role| (role, role.starting_terrain().to_string()))
            .collect();

        Ok(Self {
            active: assignment.active,
            turn_order: assignment.turn_order,
            turn_index: 0,
            positions,
        })
    }

    /// Roles in play, in selection order.
    #[must_use]
    pub fn active_roles(&self) -> &[Role] {
        &self.active
    }

    /// Check whether a role is in play.
    #[must_use]
    pub fn is_active(&self, role: Role) -> bool {
        self.active.contains(&role)
    }

    /// Number of roles in play.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.active.len()
    }

    /// The turn sequence.
    #[must_use]
    pub fn turn_order(&self) -> &[Role] {
        &self.turn_order
    }

    /// Index into the turn order of the role whose turn it is.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// The role whose turn it is.
    #[must_use]
    pub fn current_role(&self) -> Role {
        self.turn_order[self.turn_index]
    }

    /// Pass the turn to the next role and return it.
    pub fn advance_turn(&mut self) -> Role {
        self.turn_index = (self.turn_index + 1) % self.turn_order.len();
        self.current_role()
    }

    /// Terrain the role currently stands on. `None` if the role is not in play.
    #[must_use]
    pub fn current_terrain(&self, role: Role) -> Option<&str> {
        self.positions.get(&role).map(String::as_str)
    }

    /// Move a role's piece. No legality checks beyond the role being in
    /// play: callers validate the move first.
    pub fn set_terrain(
        &mut self,
        role: Role,
        terrain: impl Into<String>,
    ) -> Result<(), MoveError> {
        let slot = self
            .positions
            .get_mut(&role)
            .ok_or(MoveError::RoleNotInPlay(role))?;
        *slot = terrain.into();
        Ok(())
    }
}

/// Unchecked wire form of [`PlayerState`].
#[derive(Deserialize)]
struct PlayerStateRecord {
    active: RoleList,
    turn_order: RoleList,
    turn_index: usize,
    positions: FxHashMap<Role, String>,
}

impl TryFrom<PlayerStateRecord> for PlayerState {
    type Error = SetupError;

    fn try_from(record: PlayerStateRecord) -> Result<Self, Self::Error> {
        let assignment = RoleAssignment {
            active: record.active,
            turn_order: record.turn_order,
        };
        assignment.validate()?;

        if record.turn_index >= assignment.len() {
            return Err(SetupError::InvalidTurnIndex {
                index: record.turn_index,
                len: assignment.len(),
            });
        }
        if record.positions.len() != assignment.len()
            || !assignment
                .active
                .iter()
                .all(|role| record.positions.contains_key(role))
        {
            return Err(SetupError::PositionsMismatch);
        }

        Ok(Self {
            active: assignment.active,
            turn_order: assignment.turn_order,
            turn_index: record.turn_index,
            positions: record.positions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_players() -> PlayerState {
        PlayerState::new(RoleAssignment::fixed(&[
            Role::Piloto,
            Role::Engenheiro,
            Role::Explorador,
            Role::Mergulhador,
        ]))
        .unwrap()
    }

    #[test]
    fn test_role_colors_distinct() {
        let mut colors: Vec<_> = Role::ALL.iter().map(|r| r.color()).collect();
        colors.sort_by_key(|c| c.0);
        colors.dedup();
        assert_eq!(colors.len(), Role::ALL.len());
    }

    #[test]
    fn test_starting_terrains() {
        assert_eq!(Role::Piloto.starting_terrain(), "Heliponto");
        assert_eq!(Role::Engenheiro.starting_terrain(), "Portal de Bronze");
        assert_eq!(Role::Explorador.starting_terrain(), "Portal de Cobre");
        assert_eq!(Role::Mergulhador.starting_terrain(), "Portal de Ferro");
        assert_eq!(Role::Mensageiro.starting_terrain(), "Portal de Prata");
        assert_eq!(Role::Navegador.starting_terrain(), "Portal de Ouro");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("Piloto".parse::<Role>(), Ok(Role::Piloto));
        assert_eq!(" navegador ".parse::<Role>(), Ok(Role::Navegador));
        assert_eq!(
            "Capitão".parse::<Role>(),
            Err(ParseRoleError("Capitão".to_string()))
        );
        assert_eq!(format!("{}", Role::Mensageiro), "Mensageiro");
    }

    #[test]
    fn test_initial_positions() {
        let players = four_players();

        assert_eq!(players.current_terrain(Role::Piloto), Some("Heliponto"));
        assert_eq!(
            players.current_terrain(Role::Mergulhador),
            Some("Portal de Ferro")
        );
        assert_eq!(players.current_terrain(Role::Navegador), None);
        assert!(!players.is_active(Role::Navegador));
        assert_eq!(players.player_count(), 4);
    }

    #[test]
    fn test_turn_rotation() {
        let mut players = four_players();

        assert_eq!(players.current_role(), Role::Piloto);
        assert_eq!(players.advance_turn(), Role::Engenheiro);
        assert_eq!(players.advance_turn(), Role::Explorador);
        assert_eq!(players.advance_turn(), Role::Mergulhador);
        assert_eq!(players.advance_turn(), Role::Piloto);
        assert_eq!(players.turn_index(), 0);
    }

    #[test]
    fn test_turn_order_independent_of_selection() {
        let assignment = RoleAssignment {
            active: SmallVec::from_slice(&[Role::Navegador, Role::Piloto]),
            turn_order: SmallVec::from_slice(&[Role::Piloto, Role::Navegador]),
        };
        let mut players = PlayerState::new(assignment).unwrap();

        assert_eq!(players.active_roles(), &[Role::Navegador, Role::Piloto]);
        assert_eq!(players.current_role(), Role::Piloto);
        assert_eq!(players.advance_turn(), Role::Navegador);
    }

    #[test]
    fn test_set_terrain() {
        let mut players = four_players();

        players.set_terrain(Role::Piloto, "Observatório").unwrap();

        assert_eq!(players.current_terrain(Role::Piloto), Some("Observatório"));
        assert_eq!(players.turn_index(), 0);
    }

    #[test]
    fn test_set_terrain_inactive_role() {
        let mut players = four_players();

        assert_eq!(
            players.set_terrain(Role::Navegador, "Observatório"),
            Err(MoveError::RoleNotInPlay(Role::Navegador))
        );
        assert_eq!(players.current_terrain(Role::Navegador), None);
        assert!(!players.is_active(Role::Navegador));
    }

    #[test]
    fn test_new_rejects_bad_assignments() {
        assert_eq!(
            PlayerState::new(RoleAssignment::fixed(&[])),
            Err(SetupError::InvalidPlayerCount {
                got: 0,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS
            })
        );
        assert_eq!(
            PlayerState::new(RoleAssignment::fixed(&Role::ALL)),
            Err(SetupError::InvalidPlayerCount {
                got: 6,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS
            })
        );
        assert_eq!(
            PlayerState::new(RoleAssignment::fixed(&[Role::Piloto, Role::Piloto])),
            Err(SetupError::DuplicateRole(Role::Piloto))
        );

        let assignment = RoleAssignment {
            active: SmallVec::from_slice(&[Role::Piloto, Role::Engenheiro]),
            turn_order: SmallVec::from_slice(&[Role::Piloto, Role::Navegador]),
        };
        assert_eq!(
            PlayerState::new(assignment),
            Err(SetupError::TurnOrderMismatch)
        );
    }

    #[test]
    fn test_player_state_serialization() {
        let players = four_players();
        let json = serde_json::to_string(&players).unwrap();
        let restored: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(players, restored);
    }

    fn tampered(edit: impl FnOnce(&mut serde_json::Value)) -> Result<PlayerState, String> {
        let mut value = serde_json::to_value(four_players()).unwrap();
        edit(&mut value);
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    #[test]
    fn test_deserialize_rejects_turn_index_out_of_range() {
        let err = tampered(|v| v["turn_index"] = 9.into()).unwrap_err();
        assert!(err.contains("turn index 9"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_bad_turn_order() {
        let err = tampered(|v| {
            v["turn_order"] = serde_json::json!(["Piloto", "Engenheiro", "Explorador", "Navegador"])
        })
        .unwrap_err();
        assert!(err.contains("permutation"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_empty_roles() {
        let err = tampered(|v| {
            v["active"] = serde_json::json!([]);
            v["turn_order"] = serde_json::json!([]);
            v["positions"] = serde_json::json!({});
            v["turn_index"] = 0.into();
        })
        .unwrap_err();
        assert!(err.contains("player count"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_stray_position() {
        let err = tampered(|v| v["positions"]["Navegador"] = "Portal de Ouro".into()).unwrap_err();
        assert!(err.contains("positions"), "{}", err);
    }
}
