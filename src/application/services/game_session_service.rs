//! Game Session Service - runs the single active play session
//!
//! The service owns the session state and sequences the progression loop:
//! an activity advances the clock, the ending check runs, then an event may
//! fire and wait for a choice. All game rules live in the domain services;
//! this layer only decides which rule runs next and keeps the history.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::application::dto::{EndingResponse, EventView, SessionSnapshot, TurnReport};
use crate::domain::aggregates::CatalogAggregate;
use crate::domain::entities::{CompletedEvents, GameEvent, PlayerState};
use crate::domain::services::{
    advance_time, apply_activity, determine_ending, interact, move_to, purchase_item,
    resolve_choice, select_event,
};
use crate::domain::value_objects::{
    Activity, CharacterId, EndingKind, EventId, InteractionKind, ItemId, Location, SessionId,
};

/// Errors that stop an action before any game rule runs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Unknown {kind} '{id}'")]
    NotFound { kind: &'static str, id: String },
    #[error("The campaign is over ({0} ending)")]
    CampaignOver(EndingKind),
    #[error("Event '{0}' is waiting for a choice")]
    EventPending(EventId),
    #[error("No event is waiting for a choice")]
    NoPendingEvent,
}

struct GameSession {
    id: SessionId,
    player: PlayerState,
    completed: CompletedEvents,
    pending_event: Option<EventId>,
    ending: Option<EndingKind>,
    rng: ChaCha8Rng,
}

impl GameSession {
    fn ensure_not_over(&self) -> Result<(), GameError> {
        match &self.ending {
            Some(ending) => Err(GameError::CampaignOver(ending.clone())),
            None => Ok(()),
        }
    }

    /// Free actions are only allowed with no event waiting for a choice
    fn ensure_playable(&self) -> Result<(), GameError> {
        self.ensure_not_over()?;
        match &self.pending_event {
            Some(event) => Err(GameError::EventPending(event.clone())),
            None => Ok(()),
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            player: self.player.clone(),
            completed_events: self.completed.clone(),
            pending_event: self.pending_event.clone(),
            ending: self.ending.clone(),
        }
    }
}

pub struct GameSessionService {
    catalog: Arc<CatalogAggregate>,
    seed: Option<u64>,
    session: RwLock<GameSession>,
}

impl GameSessionService {
    /// Create the service with a new game already started
    ///
    /// With a `seed`, every new game replays the same event selections.
    pub fn new(catalog: Arc<CatalogAggregate>, seed: Option<u64>) -> Self {
        let session = fresh_session(&catalog, seed);
        Self {
            catalog,
            seed,
            session: RwLock::new(session),
        }
    }

    fn find_event(&self, id: &EventId) -> Result<&GameEvent, GameError> {
        self.catalog.find_event(id).ok_or_else(|| GameError::NotFound {
            kind: "event",
            id: id.to_string(),
        })
    }

    /// Pick an event for the session and park it until a choice is made
    ///
    /// Events without choices are narration only and complete immediately.
    fn fire_event(
        &self,
        session: &mut GameSession,
        location_override: Option<Location>,
    ) -> Option<EventView> {
        let event = select_event(
            &session.player,
            self.catalog.events(),
            &session.completed,
            location_override,
            &mut session.rng,
        )?;

        info!(
            session_id = %session.id,
            event_id = %event.id,
            day = session.player.day,
            "Event fired"
        );
        let view = EventView::new(event, &session.player);
        if event.choices.is_empty() {
            session.completed.record(event.id.clone());
        } else {
            session.pending_event = Some(event.id.clone());
        }
        Some(view)
    }

    #[instrument(skip(self))]
    pub async fn new_game(&self) -> SessionSnapshot {
        let session = fresh_session(&self.catalog, self.seed);
        info!(session_id = %session.id, "Starting new game");
        let snapshot = session.snapshot();
        *self.session.write().await = session;
        snapshot
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    /// Replace the session state wholesale (used when loading a save)
    ///
    /// Returns the state actually installed: a pending event unknown to the
    /// catalog is dropped, and a player past the last day gets an ending.
    #[instrument(skip(self, snapshot), fields(day = snapshot.player.day))]
    pub async fn restore(&self, snapshot: SessionSnapshot) -> SessionSnapshot {
        let mut session = self.session.write().await;
        let pending_event = snapshot
            .pending_event
            .filter(|id| match self.catalog.find_event(id) {
                Some(_) => true,
                None => {
                    warn!(event_id = %id, "Dropping pending event missing from catalog");
                    false
                }
            });

        let ending = snapshot
            .ending
            .or_else(|| determine_ending(&snapshot.player));

        session.id = SessionId::new();
        session.player = snapshot.player;
        session.completed = snapshot.completed_events;
        session.pending_event = pending_event;
        session.ending = ending;
        info!(
            session_id = %session.id,
            completed_events = session.completed.len(),
            "Session restored"
        );
        session.snapshot()
    }

    /// The event currently waiting for a choice, if any
    pub async fn pending_event(&self) -> Option<EventView> {
        let session = self.session.read().await;
        let id = session.pending_event.as_ref()?;
        self.catalog
            .find_event(id)
            .map(|event| EventView::new(event, &session.player))
    }

    #[instrument(skip(self))]
    pub async fn perform_activity(&self, activity: Activity) -> Result<TurnReport, GameError> {
        let mut guard = self.session.write().await;
        let session = &mut *guard;
        session.ensure_playable()?;

        let outcome = apply_activity(&session.player, activity);
        if !outcome.advances_time {
            debug!(session_id = %session.id, "Activity rejected: {}", outcome.message);
            return Ok(TurnReport::new(outcome.player, outcome.message, false));
        }

        session.player = advance_time(&outcome.player);
        let message = format!(
            "{} ({}일째 {})",
            outcome.message,
            session.player.day,
            session.player.time_of_day.display_name()
        );
        let mut report = TurnReport::new(session.player.clone(), message, true);
        report.advanced_time = true;

        if let Some(ending) = determine_ending(&session.player) {
            info!(session_id = %session.id, ending = %ending, "Campaign finished");
            session.ending = Some(ending.clone());
            report.ending = Some(ending);
            return Ok(report);
        }

        report.event = self.fire_event(session, None);
        Ok(report)
    }

    /// Go somewhere, checking for an event at the destination first
    #[instrument(skip(self))]
    pub async fn visit(&self, location: Location) -> Result<TurnReport, GameError> {
        let mut guard = self.session.write().await;
        let session = &mut *guard;
        session.ensure_playable()?;

        let event = self.fire_event(session, Some(location));
        session.player = move_to(&session.player, location);

        let mut report = TurnReport::new(
            session.player.clone(),
            format!("{}(으)로 이동했습니다.", location.display_name()),
            true,
        );
        report.event = event;
        Ok(report)
    }

    #[instrument(skip(self))]
    pub async fn choose(&self, index: usize) -> Result<TurnReport, GameError> {
        let mut guard = self.session.write().await;
        let session = &mut *guard;
        session.ensure_not_over()?;

        let event_id = session
            .pending_event
            .clone()
            .ok_or(GameError::NoPendingEvent)?;
        let event = self.find_event(&event_id)?;

        let outcome = resolve_choice(&session.player, event, index);
        if !outcome.is_accepted() {
            debug!(session_id = %session.id, event_id = %event_id, index, "Choice rejected");
            let mut report = TurnReport::new(session.player.clone(), outcome.message, false);
            report.event = Some(EventView::new(event, &session.player));
            return Ok(report);
        }

        info!(session_id = %session.id, event_id = %event_id, index, "Choice resolved");
        session.player = outcome.player;
        session.completed.record(event_id);
        session.pending_event = None;
        Ok(TurnReport::new(session.player.clone(), outcome.message, true))
    }

    /// Close the pending event without applying any choice
    #[instrument(skip(self))]
    pub async fn dismiss_event(&self) -> Result<TurnReport, GameError> {
        let mut guard = self.session.write().await;
        let session = &mut *guard;
        session.ensure_not_over()?;

        let event_id = session.pending_event.take().ok_or(GameError::NoPendingEvent)?;
        info!(session_id = %session.id, event_id = %event_id, "Event dismissed");
        session.completed.record(event_id);
        Ok(TurnReport::new(session.player.clone(), "그냥 지나쳤습니다.", true))
    }

    #[instrument(skip(self))]
    pub async fn interact(
        &self,
        character_id: &CharacterId,
        kind: InteractionKind,
    ) -> Result<TurnReport, GameError> {
        let character =
            self.catalog
                .find_character(character_id)
                .ok_or_else(|| GameError::NotFound {
                    kind: "character",
                    id: character_id.to_string(),
                })?;

        let mut session = self.session.write().await;
        session.ensure_playable()?;

        let outcome = interact(&session.player, character, kind);
        debug!(
            session_id = %session.id,
            character_id = %character_id,
            delta = outcome.affection_delta,
            "Interaction applied"
        );
        session.player = outcome.player;

        let mut report = TurnReport::new(session.player.clone(), outcome.message, true);
        report.affection_delta = Some(outcome.affection_delta);
        Ok(report)
    }

    #[instrument(skip(self))]
    pub async fn purchase(&self, item_id: &ItemId) -> Result<TurnReport, GameError> {
        let item = self
            .catalog
            .find_item(item_id)
            .ok_or_else(|| GameError::NotFound {
                kind: "item",
                id: item_id.to_string(),
            })?;

        let mut session = self.session.write().await;
        session.ensure_playable()?;

        let outcome = purchase_item(&session.player, item);
        let accepted = outcome.is_accepted();
        if accepted {
            info!(session_id = %session.id, item_id = %item_id, "Item purchased");
            session.player = outcome.player;
        }
        Ok(TurnReport::new(session.player.clone(), outcome.message, accepted))
    }

    pub async fn ending(&self) -> EndingResponse {
        let session = self.session.read().await;
        EndingResponse {
            day: session.player.day,
            ending: session
                .ending
                .clone()
                .or_else(|| determine_ending(&session.player)),
        }
    }
}

fn fresh_session(catalog: &CatalogAggregate, seed: Option<u64>) -> GameSession {
    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    GameSession {
        id: SessionId::new(),
        player: PlayerState::new_game(catalog.character_ids()),
        completed: CompletedEvents::new(),
        pending_event: None,
        ending: None,
        rng,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Character, ChoiceCondition, ChoiceEffect, EventChoice, EventTrigger, Item,
    };
    use crate::domain::value_objects::{StatKind, TimeOfDay};

    fn id(name: &str) -> CharacterId {
        CharacterId::new(name).unwrap()
    }

    fn test_catalog() -> Arc<CatalogAggregate> {
        let sakura = Character::new(id("sakura"), "사쿠라")
            .with_dialogue(0, "안녕")
            .with_dialogue(50, "친해요");

        let meeting = GameEvent::new(EventId::new("first_meeting").unwrap(), "첫 만남")
            .with_trigger(EventTrigger {
                once: true,
                location: Some(Location::Classroom),
                ..Default::default()
            })
            .with_choice(
                EventChoice::new(
                    "말을 건다",
                    ChoiceEffect::narrated("사쿠라와 인사를 나눴다.")
                        .with_affection(id("sakura"), 5)
                        .with_flag("met_sakura"),
                ),
            )
            .with_choice(
                EventChoice::new("어려운 책 이야기를 한다", ChoiceEffect::narrated("..."))
                    .with_condition(
                        ChoiceCondition::default().with_min_stat(StatKind::Intelligence, 50),
                    ),
            );

        CatalogAggregate::new(
            vec![sakura],
            vec![meeting],
            vec![Item::new(ItemId::new("flower").unwrap(), "꽃다발", 300)],
        )
        .unwrap()
        .into()
    }

    fn service() -> GameSessionService {
        GameSessionService::new(test_catalog(), Some(7))
    }

    #[tokio::test]
    async fn test_activity_advances_time() {
        let service = service();
        let report = service.perform_activity(Activity::Study).await.unwrap();

        assert!(report.accepted);
        assert!(report.advanced_time);
        assert_eq!(report.player.time_of_day, TimeOfDay::Afternoon);
        assert!(report.message.ends_with("(1일째 오후)"));
        assert_eq!(report.player.stats.intelligence, 12);
        // Player starts in the dormitory, where no event is defined
        assert!(report.event.is_none());
    }

    #[tokio::test]
    async fn test_exhausted_activity_does_not_advance() {
        let service = service();
        let mut snapshot = service.snapshot().await;
        snapshot.player.stats.stamina = 5;
        service.restore(snapshot.clone()).await;

        let report = service.perform_activity(Activity::Exercise).await.unwrap();
        assert!(!report.accepted);
        assert_eq!(report.player, snapshot.player);
        assert_eq!(service.snapshot().await.player, snapshot.player);
    }

    #[tokio::test]
    async fn test_event_flow_records_completion() {
        let service = service();
        let report = service.visit(Location::Classroom).await.unwrap();
        let event = report.event.expect("first meeting should fire");
        assert_eq!(event.id.as_str(), "first_meeting");
        assert!(event.choices[0].available);
        assert!(!event.choices[1].available);

        // Free actions are blocked until the event is resolved
        assert!(matches!(
            service.perform_activity(Activity::Study).await,
            Err(GameError::EventPending(_))
        ));

        let rejected = service.choose(1).await.unwrap();
        assert!(!rejected.accepted);
        assert!(service.pending_event().await.is_some());

        let accepted = service.choose(0).await.unwrap();
        assert!(accepted.accepted);
        assert_eq!(accepted.player.affection_for(&id("sakura")).value(), 5);
        assert!(accepted.player.has_flag("met_sakura"));

        let snapshot = service.snapshot().await;
        assert!(snapshot.pending_event.is_none());
        assert!(snapshot
            .completed_events
            .contains(&EventId::new("first_meeting").unwrap()));

        // A once event never fires again
        let again = service.visit(Location::Classroom).await.unwrap();
        assert!(again.event.is_none());
    }

    #[tokio::test]
    async fn test_choose_without_pending_event() {
        let service = service();
        assert_eq!(service.choose(0).await.unwrap_err(), GameError::NoPendingEvent);
        assert_eq!(service.dismiss_event().await.unwrap_err(), GameError::NoPendingEvent);
    }

    #[tokio::test]
    async fn test_dismiss_records_event() {
        let service = service();
        service.visit(Location::Classroom).await.unwrap();
        service.dismiss_event().await.unwrap();

        let snapshot = service.snapshot().await;
        assert!(snapshot.pending_event.is_none());
        assert_eq!(snapshot.completed_events.len(), 1);
        assert_eq!(snapshot.player.affection_for(&id("sakura")).value(), 0);
    }

    #[tokio::test]
    async fn test_ending_reached_after_campaign() {
        let service = service();
        let mut snapshot = service.snapshot().await;
        snapshot.player.day = 30;
        snapshot.player.time_of_day = TimeOfDay::Night;
        snapshot.player.adjust_affection(&id("sakura"), 60);
        service.restore(snapshot).await;

        assert_eq!(service.ending().await.ending, None);

        let report = service.perform_activity(Activity::Rest).await.unwrap();
        assert_eq!(report.player.day, 31);
        assert_eq!(report.ending, Some(EndingKind::Normal));

        assert_eq!(
            service.perform_activity(Activity::Rest).await.unwrap_err(),
            GameError::CampaignOver(EndingKind::Normal)
        );
        assert_eq!(service.ending().await.ending, Some(EndingKind::Normal));

        service.new_game().await;
        assert_eq!(service.ending().await.ending, None);
    }

    #[tokio::test]
    async fn test_interact_unknown_character() {
        let service = service();
        let result = service.interact(&id("nobody"), InteractionKind::Talk).await;
        assert!(matches!(result, Err(GameError::NotFound { kind: "character", .. })));
    }

    #[tokio::test]
    async fn test_interact_talk() {
        let service = service();
        let report = service
            .interact(&id("sakura"), InteractionKind::Talk)
            .await
            .unwrap();
        assert_eq!(report.message, "안녕");
        assert_eq!(report.affection_delta, Some(1));
    }

    #[tokio::test]
    async fn test_purchase() {
        let service = service();
        let flower = ItemId::new("flower").unwrap();
        let report = service.purchase(&flower).await.unwrap();
        assert!(report.accepted);
        assert!(report.player.has_item(&flower));

        let missing = service.purchase(&ItemId::new("sword").unwrap()).await;
        assert!(matches!(missing, Err(GameError::NotFound { kind: "item", .. })));
    }

    #[tokio::test]
    async fn test_restore_drops_unknown_pending_event() {
        let service = service();
        let mut snapshot = service.snapshot().await;
        snapshot.pending_event = Some(EventId::new("removed_event").unwrap());
        let installed = service.restore(snapshot).await;

        assert!(installed.pending_event.is_none());
        assert_eq!(installed, service.snapshot().await);
    }

    #[tokio::test]
    async fn test_restore_past_last_day_ends_campaign() {
        let service = service();
        let mut snapshot = service.snapshot().await;
        snapshot.player.day = 35;
        snapshot.ending = None;

        let installed = service.restore(snapshot).await;
        assert_eq!(installed.ending, Some(EndingKind::Solo));
        assert_eq!(service.ending().await.ending, Some(EndingKind::Solo));

        let result = service.interact(&id("sakura"), InteractionKind::Gift).await;
        assert_eq!(result.unwrap_err(), GameError::CampaignOver(EndingKind::Solo));
        assert!(matches!(
            service.visit(Location::Classroom).await,
            Err(GameError::CampaignOver(_))
        ));
    }
}
