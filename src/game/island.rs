//! The island session: setup, moves and presentation queries.

use log::{debug, info, warn};

use super::view::{CornerTreasure, MoveReport, RoleView, SetupSummary, TileView, TurnChange};
use crate::board::{Direction, GridCoord, GridTopology, TileIndex, TileStatus, TileStatusTracker};
use crate::core::{
    BoardConfig, GameRng, MoveError, PlayerState, Role, RoleAssignment, SetupError, StatusError,
    Treasure,
};
use crate::rules::MoveValidator;
use crate::setup::{assign_roles, assign_terrain_names, assign_treasures};

/// Engine state for one session.
#[derive(Clone, Debug)]
pub struct IslandGame {
    config: BoardConfig,
    seed: u64,
    terrain_order: Vec<String>,
    treasures: [Treasure; 4],
    topology: GridTopology,
    status: TileStatusTracker,
    players: PlayerState,
}

/// Builder for creating an `IslandGame`.
///
/// By default the standard island is shuffled and laid out, roles and turn
/// order are drawn at random. Roles, turn order and the terrain layout can be
/// fixed for scripted sessions.
///
/// ```
/// use forbidden_island::board::Direction;
/// use forbidden_island::core::Role;
/// use forbidden_island::game::IslandGame;
///
/// let mut game = IslandGame::builder()
///     .roles(&[Role::Piloto, Role::Navegador])
///     .black_tiles([])
///     .place("Heliponto", 0, 0)
///     .place("Observatório", 0, 1)
///     .build()
///     .unwrap();
///
/// assert!(game.attempt_move(Role::Piloto, Direction::East));
/// assert_eq!(game.current_role(), Role::Navegador);
/// ```
#[derive(Clone, Debug, Default)]
pub struct IslandGameBuilder {
    config: BoardConfig,
    roles: Option<RoleAssignment>,
    placements: Vec<(String, GridCoord)>,
}

impl IslandGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.config.grid_size = grid_size;
        self
    }

    pub fn black_tiles(mut self, tiles: impl IntoIterator<Item = u16>) -> Self {
        self.config = self.config.with_black_tiles(tiles);
        self
    }

    pub fn terrain_catalog<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.config = self.config.with_terrain_catalog(names);
        self
    }

    /// Play with exactly these roles, taking turns in the given order.
    ///
    /// Overrides the player count.
    pub fn roles(self, roles: &[Role]) -> Self {
        self.role_assignment(RoleAssignment::fixed(roles))
    }

    /// Play with a given selection and turn order.
    pub fn role_assignment(mut self, assignment: RoleAssignment) -> Self {
        self.config.player_count = assignment.len();
        self.roles = Some(assignment);
        self
    }

    /// Put a terrain on a cell instead of shuffling the catalog over the grid.
    ///
    /// As soon as one placement is given, only the placed terrains are on
    /// the board. The catalog is still shuffled and reported by
    /// [`IslandGame::terrain_order`], but it no longer drives the layout.
    pub fn place(mut self, terrain: impl Into<String>, row: usize, col: usize) -> Self {
        self.placements.push((terrain.into(), GridCoord::new(row, col)));
        self
    }

    /// Build the session.
    ///
    /// Fails without building anything on an invalid configuration: a player
    /// count outside 2-4, a catalog too small for the playable cells, a
    /// duplicate terrain or role, or a placement on a black or off-grid cell.
    pub fn build(self) -> Result<IslandGame, SetupError> {
        let IslandGameBuilder {
            config,
            roles,
            placements,
        } = self;

        config.validate()?;
        if let Some(assignment) = &roles {
            assignment.validate()?;
            if assignment.len() != config.player_count {
                return Err(SetupError::RoleCountMismatch {
                    roles: assignment.len(),
                    player_count: config.player_count,
                });
            }
        }
        if placements.is_empty() {
            config.validate_catalog_size()?;
        }

        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let terrain_order = assign_terrain_names(&mut rng, &config.terrain_catalog);
        let treasures = assign_treasures(&mut rng);
        let roles = roles.unwrap_or_else(|| assign_roles(&mut rng, config.player_count));

        let mut topology = GridTopology::new(config.grid_size, config.black_tiles.iter().copied());
        if placements.is_empty() {
            topology.lay_out(&terrain_order)?;
        } else {
            for (terrain, coord) in placements {
                topology.assign_terrain(coord, terrain)?;
            }
        }

        let players = PlayerState::new(roles)?;
        for &role in players.active_roles() {
            let start = role.starting_terrain();
            if topology.terrain_grid_coords(start).is_none() {
                warn!("{} starts on {}, which is not on the board", role, start);
            }
        }

        info!(
            "island ready: {} players, seed {}, turn order {:?}",
            players.player_count(),
            rng.seed(),
            players.turn_order()
        );

        Ok(IslandGame {
            seed: rng.seed(),
            config,
            terrain_order,
            treasures,
            topology,
            status: TileStatusTracker::new(),
            players,
        })
    }
}

impl IslandGame {
    pub fn builder() -> IslandGameBuilder {
        IslandGameBuilder::new()
    }

    /// Set up a session from a configuration.
    pub fn new(config: BoardConfig) -> Result<Self, SetupError> {
        IslandGameBuilder::new().config(config).build()
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Seed used for setup; pass it back in the config to replay the setup.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    #[must_use]
    pub fn status(&self) -> &TileStatusTracker {
        &self.status
    }

    #[must_use]
    pub fn players(&self) -> &PlayerState {
        &self.players
    }

    /// The shuffled terrain catalog.
    ///
    /// Laid over the board row by row unless the session was built with
    /// explicit placements, in which case the board ignores it.
    #[must_use]
    pub fn terrain_order(&self) -> &[String] {
        &self.terrain_order
    }

    /// The shuffled treasures.
    #[must_use]
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    // === Turns ===

    #[must_use]
    pub fn current_role(&self) -> Role {
        self.players.current_role()
    }

    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.players.turn_index()
    }

    /// End the current role's turn and hand over to the next one.
    pub fn end_player_turn(&mut self) -> TurnChange {
        let previous = self.players.current_role();
        let current = self.players.advance_turn();
        debug!("turn passes from {} to {}", previous, current);
        TurnChange { previous, current }
    }

    // === Movement ===

    fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(&self.topology, &self.status)
    }

    /// Move `role` one step and end its turn.
    ///
    /// Only the current role may move. On any error nothing changes: the
    /// role keeps its terrain and the turn does not advance.
    pub fn try_move(&mut self, role: Role, direction: Direction) -> Result<MoveReport, MoveError> {
        if !self.players.is_active(role) {
            return Err(MoveError::RoleNotInPlay(role));
        }
        let from = self
            .players
            .current_terrain(role)
            .ok_or(MoveError::RoleNotInPlay(role))?
            .to_string();

        let current = self.players.current_role();
        if role != current {
            return Err(MoveError::NotYourTurn { role, current });
        }

        let plan = match self.validator().validate(&from, direction) {
            Ok(plan) => plan,
            Err(err) => {
                debug!("{} cannot move {} from {}: {}", role, direction, from, err);
                return Err(err);
            }
        };

        self.players.set_terrain(role, plan.terrain.clone())?;
        let change = self.end_player_turn();
        debug!("{} moved {} from {} to {}", role, direction, from, plan.terrain);

        Ok(MoveReport {
            role,
            from,
            to: plan.terrain,
            from_coord: plan.from,
            to_coord: plan.to,
            next_role: change.current,
        })
    }

    /// Boolean form of [`try_move`](Self::try_move).
    pub fn attempt_move(&mut self, role: Role, direction: Direction) -> bool {
        self.try_move(role, direction).is_ok()
    }

    /// Apply a direction token for the current role.
    ///
    /// Accepts `north`/`south`/`east`/`west` and `norte`/`sul`/`leste`/`oeste`.
    /// Anything else is rejected without changing state.
    pub fn handle_input(&mut self, token: &str) -> Result<MoveReport, MoveError> {
        let direction: Direction = token
            .parse()
            .map_err(|_| MoveError::UnknownDirection(token.to_string()))?;
        self.try_move(self.current_role(), direction)
    }

    /// Directions in which `role` could legally step right now.
    ///
    /// Ignores whose turn it is. Empty for a role not in play.
    #[must_use]
    pub fn legal_directions(&self, role: Role) -> Vec<Direction> {
        self.players
            .current_terrain(role)
            .map(|terrain| self.validator().legal_directions(terrain))
            .unwrap_or_default()
    }

    // === Tile status ===

    #[must_use]
    pub fn tile_status(&self, tile: TileIndex) -> TileStatus {
        self.status.status_of(tile)
    }

    /// Start a playable tile sinking.
    pub fn mark_sinking(&mut self, tile: TileIndex) -> Result<TileStatus, StatusError> {
        self.check_playable(tile)?;
        self.status.mark_sinking(tile)
    }

    /// Sink a playable tile.
    pub fn mark_sunk(&mut self, tile: TileIndex) -> Result<TileStatus, StatusError> {
        self.check_playable(tile)?;
        self.status.mark_sunk(tile)
    }

    fn check_playable(&self, tile: TileIndex) -> Result<(), StatusError> {
        if self.topology.is_playable(tile) {
            Ok(())
        } else {
            Err(StatusError::NotPlayable(tile))
        }
    }

    // === Presentation queries ===

    /// Every non-black tile with its terrain and status, in index order.
    #[must_use]
    pub fn tiles(&self) -> Vec<TileView> {
        self.topology
            .playable_tiles()
            .filter_map(|tile| {
                let coord = self.topology.coord_of(tile)?;
                let terrain = self.topology.terrain_at(coord);
                Some(TileView {
                    tile,
                    coord,
                    terrain: terrain.map(str::to_string),
                    status: self.status.status_of(tile),
                    treasure: terrain.and_then(Treasure::for_terrain),
                })
            })
            .collect()
    }

    /// Treasures on the four corners: top-left, top-right, bottom-left,
    /// bottom-right, dealt round-robin from the shuffled treasures.
    #[must_use]
    pub fn corner_treasures(&self) -> Vec<CornerTreasure> {
        let last = self.topology.grid_size().saturating_sub(1);
        let mut corners: Vec<GridCoord> = Vec::with_capacity(4);
        for coord in [
            GridCoord::new(0, 0),
            GridCoord::new(0, last),
            GridCoord::new(last, 0),
            GridCoord::new(last, last),
        ] {
            if !corners.contains(&coord) {
                corners.push(coord);
            }
        }

        corners
            .into_iter()
            .enumerate()
            .map(|(i, coord)| {
                let treasure = self.treasures[i % self.treasures.len()];
                CornerTreasure {
                    coord,
                    treasure,
                    color: treasure.color(),
                }
            })
            .collect()
    }

    /// Pieces of the active roles, in selection order.
    #[must_use]
    pub fn role_views(&self) -> Vec<RoleView> {
        let current = self.players.current_role();
        self.players
            .active_roles()
            .iter()
            .enumerate()
            .filter_map(|(slot, &role)| {
                let terrain = self.players.current_terrain(role)?;
                Some(RoleView {
                    role,
                    color: role.color(),
                    terrain: terrain.to_string(),
                    coord: self.topology.terrain_grid_coords(terrain),
                    slot,
                    is_current: role == current,
                })
            })
            .collect()
    }

    /// What setup decided, for display.
    #[must_use]
    pub fn setup_summary(&self) -> SetupSummary {
        SetupSummary {
            seed: self.seed,
            terrain_order: self.terrain_order.clone(),
            treasures: self.treasures.to_vec(),
            roles: self.role_views(),
            turn_order: self.players.turn_order().to_vec(),
        }
    }
}
