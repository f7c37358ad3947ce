use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::core::{
    Advance, EditRejection, OnboardingStep, OnboardingWizard, Screen, ScreenRouter, SwipeSession,
};
use crate::models::{
    AddPhotoRequest, AdvanceResponse, AppConfig, DiscoveryView, OnboardingView, SelectTabRequest,
    SessionView, SwipeResponse, UpdateDraftRequest,
};
use crate::routes::{ApiError, AppState};

/// Configure session, onboarding and discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(delete_session))
        .route("/sessions/{id}/start", web::post().to(get_started))
        .route("/sessions/{id}/onboarding", web::patch().to(update_draft))
        .route("/sessions/{id}/onboarding/photos", web::post().to(add_photo))
        .route("/sessions/{id}/onboarding/photos/{index}", web::delete().to(remove_photo))
        .route("/sessions/{id}/onboarding/interests/{name}", web::post().to(toggle_interest))
        .route("/sessions/{id}/onboarding/advance", web::post().to(advance_onboarding))
        .route("/sessions/{id}/onboarding/retreat", web::post().to(retreat_onboarding))
        .route("/sessions/{id}/tab", web::post().to(select_tab))
        .route("/sessions/{id}/discover/{action}", web::post().to(discover));
}

fn onboarding_view(wizard: &OnboardingWizard, config: &AppConfig) -> OnboardingView {
    let step = wizard.step();
    OnboardingView {
        step,
        step_index: step.index(),
        total_steps: OnboardingStep::ALL.len(),
        progress: wizard.progress(),
        can_advance: wizard.can_advance(config),
        draft: wizard.draft().clone(),
    }
}

fn discovery_view(session: &SwipeSession) -> DiscoveryView {
    DiscoveryView {
        state: session.state(),
        current_profile: session.current_profile().cloned(),
        swipe_count: session.swipe_count(),
        swipe_limit: session.swipe_limit(),
        remaining: session.remaining(),
        matches: session.matches().to_vec(),
        pending_match: session.pending_match().cloned(),
    }
}

fn session_view(id: Uuid, router: &ScreenRouter) -> SessionView {
    let screen = router.screen();
    let in_main = screen == Screen::Main;
    let config = router.resolver().get_config();

    SessionView {
        session_id: id,
        screen,
        active_tab: in_main.then(|| router.active_tab()),
        tabs: if in_main { router.visible_tabs() } else { Vec::new() },
        onboarding: (screen == Screen::Onboarding)
            .then(|| onboarding_view(router.wizard(), &config)),
        discovery: in_main.then(|| discovery_view(router.discovery())),
        user_profile: router.user_profile().cloned(),
    }
}

fn require_screen(router: &ScreenRouter, expected: Screen) -> Result<(), ApiError> {
    if router.screen() == expected {
        return Ok(());
    }
    let code = match expected {
        Screen::Onboarding => "not_onboarding",
        Screen::Main => "not_in_main",
        Screen::Splash => "not_on_splash",
    };
    Err(ApiError::conflict(
        code,
        format!("Session is on the {:?} screen", router.screen()),
    ))
}

fn rejection(reason: EditRejection) -> ApiError {
    match reason {
        EditRejection::PhotoLimit => {
            ApiError::conflict("photo_limit", "Maximum number of photos reached")
        }
        EditRejection::InterestLimit => {
            ApiError::conflict("interest_limit", "Maximum number of interests reached")
        }
        EditRejection::UnknownInterest => ApiError::BadRequest("Unknown interest".to_string()),
        EditRejection::NoSuchPhoto => ApiError::BadRequest("No photo at that position".to_string()),
    }
}

/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let (id, router) = state.sessions.create().await;
    let router = router.lock().await;
    tracing::info!("New session {}", id);
    Ok(HttpResponse::Created().json(session_view(id, &router)))
}

/// GET /api/v1/sessions/{id}
async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let shared = state.sessions.get(id).await?;
    let router = shared.lock().await;
    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// DELETE /api/v1/sessions/{id}
async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state.sessions.remove(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/v1/sessions/{id}/start
async fn get_started(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;

    require_screen(&router, Screen::Splash)?;
    router.get_started();
    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// PATCH /api/v1/sessions/{id}/onboarding
///
/// Request body (every field optional):
/// ```json
/// {
///   "name": "Sam",
///   "age": "29",
///   "gender": "Non-binary",
///   "interestedIn": "Everyone",
///   "location": "Oakland",
///   "bio": "string",
///   "profession": "string"
/// }
/// ```
async fn update_draft(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    req: web::Json<UpdateDraftRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for draft update: {:?}", errors);
        return Err(errors.into());
    }

    let id = id.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Onboarding)?;

    let req = req.into_inner();
    let wizard = router.wizard_mut();
    if let Some(name) = &req.name {
        wizard.set_name(name);
    }
    if let Some(age) = &req.age {
        wizard.set_age(age);
    }
    if let Some(gender) = req.gender {
        wizard.set_gender(gender);
    }
    if let Some(show_me) = req.interested_in {
        wizard.set_interested_in(show_me);
    }
    if let Some(location) = &req.location {
        wizard.set_location(location);
    }
    if let Some(bio) = &req.bio {
        wizard.set_bio(bio);
    }
    if let Some(profession) = &req.profession {
        wizard.set_profession(profession);
    }

    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// POST /api/v1/sessions/{id}/onboarding/photos
async fn add_photo(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    req: web::Json<AddPhotoRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let id = id.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Onboarding)?;

    let config = router.resolver().get_config();
    router
        .wizard_mut()
        .add_photo(&req.url, &config)
        .map_err(rejection)?;

    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// DELETE /api/v1/sessions/{id}/onboarding/photos/{index}
async fn remove_photo(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, usize)>,
) -> Result<HttpResponse, ApiError> {
    let (id, index) = path.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Onboarding)?;

    router.wizard_mut().remove_photo(index).map_err(rejection)?;
    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// POST /api/v1/sessions/{id}/onboarding/interests/{name}
async fn toggle_interest(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> Result<HttpResponse, ApiError> {
    let (id, interest) = path.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Onboarding)?;

    router
        .wizard_mut()
        .toggle_interest(&interest)
        .map_err(rejection)?;
    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// POST /api/v1/sessions/{id}/onboarding/advance
///
/// A step that does not validate yet is reported as `"blocked"`, not as an error.
async fn advance_onboarding(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Onboarding)?;

    let (outcome, step, profile) = match router.advance_onboarding() {
        Advance::Blocked(step) => ("blocked", step, None),
        Advance::Moved(step) => ("moved", step, None),
        Advance::Completed(profile) => ("completed", OnboardingStep::Interests, Some(profile)),
    };

    Ok(HttpResponse::Ok().json(AdvanceResponse {
        outcome: outcome.to_string(),
        step,
        profile,
        session: session_view(id, &router),
    }))
}

/// POST /api/v1/sessions/{id}/onboarding/retreat
async fn retreat_onboarding(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Onboarding)?;

    router.wizard_mut().retreat();
    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// POST /api/v1/sessions/{id}/tab
async fn select_tab(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    req: web::Json<SelectTabRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Main)?;

    if !router.select_tab(req.tab) {
        return Err(ApiError::conflict(
            "tab_unavailable",
            format!("Tab {:?} is not available", req.tab),
        ));
    }
    Ok(HttpResponse::Ok().json(session_view(id, &router)))
}

/// POST /api/v1/sessions/{id}/discover/{like|nope|super-like|dismiss|restart}
///
/// Swipes that cannot apply (limit reached, queue exhausted, match on
/// screen) answer with `"applied": false`.
async fn discover(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> Result<HttpResponse, ApiError> {
    let (id, action) = path.into_inner();
    let shared = state.sessions.get(id).await?;
    let mut router = shared.lock().await;
    require_screen(&router, Screen::Main)?;

    let session = router.discovery_mut();
    let (applied, event) = match action.as_str() {
        "like" => {
            let event = session.like();
            (event.is_some(), event)
        }
        "nope" => {
            let event = session.nope();
            (event.is_some(), event)
        }
        "super-like" => {
            let event = session.super_like();
            (event.is_some(), event)
        }
        "dismiss" => (session.dismiss_match().is_some(), None),
        "restart" => {
            session.restart();
            (true, None)
        }
        other => return Err(ApiError::BadRequest(format!("Unknown discovery action: {}", other))),
    };

    Ok(HttpResponse::Ok().json(SwipeResponse {
        applied,
        event,
        discovery: discovery_view(router.discovery()),
    }))
}
