pub mod industry_researcher;
pub mod market_strategist;
pub mod resource_specialist;
pub mod solution_architect;
