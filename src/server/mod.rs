pub mod handlers;
pub mod types;

use crate::{
    Result,
    advisor::{
        Advisor, BloodSugarInput, Category, ExerciseInput, MealPlanInput, MedicationInput,
        SymptomInput,
    },
    config::Config,
    llm::{LlmClient, OpenAiClient},
};
use axum::{Router, routing::post};
use handlers::{AppState, advise};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// One POST route per advisory category.
pub fn router(advisor: Advisor) -> Router {
    let app_state = AppState {
        advisor: Arc::new(advisor),
    };

    Router::new()
        .route(
            Category::BloodSugar.route(),
            post(advise::<BloodSugarInput>),
        )
        .route(Category::MealPlan.route(), post(advise::<MealPlanInput>))
        .route(Category::Symptoms.route(), post(advise::<SymptomInput>))
        .route(Category::Exercise.route(), post(advise::<ExerciseInput>))
        .route(
            Category::Medication.route(),
            post(advise::<MedicationInput>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm_client = OpenAiClient::new(config.llm.clone())?;
    info!("Using model {}", llm_client.model());

    let llm_client: Arc<dyn LlmClient> = Arc::new(llm_client);
    let advisor = Advisor::new(llm_client);

    match advisor.welcome().await {
        Ok(message) => info!("{}", message.trim()),
        Err(e) => warn!("Error generating welcome message: {}", e),
    }

    let app = router(advisor);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);
    for category in Category::ALL {
        info!("  POST {:<12} - {}", category.route(), category.summary());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
