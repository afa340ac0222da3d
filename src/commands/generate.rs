//! Generate command - Populate tutorial context homes with demo data
//!
//! Each tutorial function is a fixed script of my-context invocations for
//! one demo persona. Every string is a literal; a rerun issues the exact
//! same sequence of commands.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::config;
use crate::mycontext::cli::{MyContext, StartOptions};

fn started_by(created_by: &str, project: &str) -> StartOptions {
    StartOptions {
        project: Some(project.to_string()),
        labels: None,
        created_by: Some(created_by.to_string()),
    }
}

/// Tutorial 1: Backend Developer implementing payment retry logic
fn tutorial_01_backend_solo(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!("\n{}", "Tutorial 1: Backend Developer Solo (Alice)".bold());
    let home = homes.join("tutorial-01-backend-solo");

    ctx.start(&home, "payment-retry-logic", &started_by("alice", "payment-service"))?;
    ctx.note(&home, "DECISION: Exponential backoff strategy - 1s, 2s, 4s, 8s")?;
    ctx.note(&home, "Using exponential backoff to handle transient failures")?;
    ctx.note(&home, "Max retries: 3 attempts before marking payment as failed")?;
    ctx.note(&home, "Using context.Context for cancellation support")?;
    ctx.note(&home, "Database transaction rolled back on timeout")?;
    ctx.file(&home, "internal/payments/retry.go")?;
    ctx.file(&home, "internal/payments/backoff.go")?;
    ctx.file(&home, "tests/payments/retry_test.go")?;
    ctx.stop(&home)?;

    println!("  {} Tutorial 1 complete", "Done:".green());
    Ok(())
}

/// Tutorial 2: Frontend Developer implementing responsive checkout UI
fn tutorial_02_frontend_solo(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!("\n{}", "Tutorial 2: Frontend Developer Solo (Bob)".bold());
    let home = homes.join("tutorial-02-frontend-solo");

    ctx.start(&home, "checkout-ui-responsive", &started_by("bob", "web-app"))?;
    ctx.note(&home, "DECISION: Using CSS Grid for 3-column layout")?;
    ctx.note(&home, "Mobile-first approach - 1 column on mobile, 3 on desktop")?;
    ctx.note(&home, "A11Y: Added ARIA labels to all payment form fields")?;
    ctx.note(&home, "A11Y: Keyboard navigation fully supported (Tab order tested)")?;
    ctx.note(&home, "Using semantic HTML for better screen reader support")?;
    ctx.note(&home, "Color contrast ratio: 4.5:1 (WCAG AA compliant)")?;
    ctx.file(&home, "src/components/Checkout.tsx")?;
    ctx.file(&home, "src/components/PaymentForm.tsx")?;
    ctx.file(&home, "src/styles/checkout.css")?;
    ctx.file(&home, "tests/components/Checkout.test.tsx")?;
    ctx.stop(&home)?;

    println!("  {} Tutorial 2 complete", "Done:".green());
    Ok(())
}

/// Tutorial 3: QA Engineer testing payment flow
fn tutorial_03_qa_solo(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!("\n{}", "Tutorial 3: QA Engineer Solo (Carol)".bold());
    let home = homes.join("tutorial-03-qa-solo");

    ctx.start(&home, "payment-flow-testing", &started_by("carol", "qa-suite"))?;
    ctx.note(&home, "Test scope: Payment flow across Chrome, Firefox, Safari, Edge")?;
    ctx.note(&home, "✅ Test passed: Chrome 120 - payment successful")?;
    ctx.note(&home, "✅ Test passed: Firefox 121 - payment successful")?;
    ctx.note(&home, "✅ Test passed: Edge 120 - payment successful")?;
    ctx.note(&home, "❌ BUG: Safari 16.2 - card validation fails on submit")?;
    ctx.note(&home, "BUG DETAILS: JS error in form validation - RegEx incompatibility")?;
    ctx.note(&home, "WORKAROUND: Need to update regex pattern for Safari compatibility")?;
    ctx.file(&home, "tests/e2e/payment-flow.spec.js")?;
    ctx.file(&home, "tests/fixtures/test-cards.json")?;
    ctx.file(&home, "bug-reports/safari-validation-bug.md")?;
    ctx.stop(&home)?;

    println!("  {} Tutorial 3 complete", "Done:".green());
    Ok(())
}

/// Tutorial 4: Consultant juggling 3 client projects
fn tutorial_04_multi_project(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!("\n{}", "Tutorial 4: Multi-Project Consultant (Alice)".bold());
    let home = homes.join("tutorial-04-multi-project");

    // Client 1: ACME Corp
    ctx.start(&home, "api-optimization", &started_by("alice", "client-acme"))?;
    ctx.note(&home, "Client context: E-commerce platform, high traffic")?;
    ctx.note(&home, "Performance issue: API latency >500ms on product search")?;
    ctx.note(&home, "SOLUTION: Added Redis caching layer for product catalog")?;
    ctx.file(&home, "acme/internal/cache/redis.go")?;
    ctx.stop(&home)?;

    // Client 2: TechCorp
    ctx.start(&home, "database-migration", &started_by("alice", "client-techcorp"))?;
    ctx.note(&home, "Client context: B2B SaaS, migrating MySQL → PostgreSQL")?;
    ctx.note(&home, "Migration strategy: Blue-green deployment with dual-write period")?;
    ctx.note(&home, "Data validation: Compare row counts after migration")?;
    ctx.file(&home, "techcorp/migrations/001_initial_schema.sql")?;
    ctx.stop(&home)?;

    // Client 3: Startup
    ctx.start(&home, "security-audit", &started_by("alice", "client-startup"))?;
    ctx.note(&home, "Client context: Fintech startup preparing for SOC2 audit")?;
    ctx.note(&home, "FINDING: API keys stored in plaintext in config files")?;
    ctx.note(&home, "RECOMMENDATION: Move to AWS Secrets Manager")?;
    ctx.note(&home, "FINDING: No rate limiting on public API endpoints")?;
    ctx.note(&home, "RECOMMENDATION: Implement token bucket algorithm")?;
    ctx.file(&home, "startup/security/audit-report.md")?;
    ctx.stop(&home)?;

    // More contexts showing switching
    ctx.start(&home, "acme-payment-integration", &started_by("alice", "client-acme"))?;
    ctx.note(&home, "Integrating Stripe payment gateway")?;
    ctx.note(&home, "Using Stripe API v2023-10-16")?;
    ctx.stop(&home)?;

    ctx.start(&home, "techcorp-ci-pipeline", &started_by("alice", "client-techcorp"))?;
    ctx.note(&home, "Setting up GitHub Actions for automated testing")?;
    ctx.note(&home, "Pipeline stages: lint → test → build → deploy")?;
    ctx.stop(&home)?;

    ctx.start(&home, "startup-monitoring", &started_by("alice", "client-startup"))?;
    ctx.note(&home, "Setting up Datadog for application monitoring")?;
    ctx.note(&home, "Alerts configured for: API latency, error rate, throughput")?;
    ctx.stop(&home)?;

    println!("  {} Tutorial 4 complete", "Done:".green());
    Ok(())
}

/// Tutorial 5: Scrum Master managing a sprint
fn tutorial_05_scrum_master(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!("\n{}", "Tutorial 5: Scrum Master (Dave)".bold());
    let home = homes.join("tutorial-05-scrum-master");

    // Sprint 5 planning
    ctx.start(&home, "sprint-5-planning", &started_by("dave", "team-alpha"))?;
    ctx.note(&home, "Sprint 5 goals: Payment integration + responsive UI")?;
    ctx.note(&home, "Team capacity: 5 developers × 8 days = 40 dev-days")?;
    ctx.note(&home, "Team velocity: 42 story points (3-sprint average: 38)")?;
    ctx.note(&home, "Sprint commitment: 40 story points (conservative)")?;
    ctx.note(&home, "BLOCKER: API dependency on Platform team (payment gateway)")?;
    ctx.note(&home, "Mitigation: Daily sync with Platform team lead")?;
    ctx.file(&home, "sprint-5/planning/sprint-backlog.md")?;
    ctx.file(&home, "sprint-5/planning/capacity-plan.xlsx")?;
    ctx.stop(&home)?;

    // Daily standup tracking
    ctx.start(&home, "sprint-5-day-3-standup", &started_by("dave", "team-alpha"))?;
    ctx.note(&home, "Alice: Payment retry logic - 80% complete")?;
    ctx.note(&home, "Bob: Checkout UI - blocked on design review")?;
    ctx.note(&home, "Carol: E2E tests - Safari bug found")?;
    ctx.note(&home, "ACTION ITEM: Schedule design review for Bob today")?;
    ctx.stop(&home)?;

    // Completed sprint history
    ctx.start(&home, "sprint-4-retrospective", &started_by("dave", "team-alpha"))?;
    ctx.note(&home, "Sprint 4: Completed 38 / 40 story points")?;
    ctx.note(&home, "What went well: Good collaboration, clear requirements")?;
    ctx.note(&home, "What to improve: Earlier QA involvement, better estimation")?;
    ctx.stop(&home)?;

    ctx.start(&home, "sprint-4-planning", &started_by("dave", "team-alpha"))?;
    ctx.note(&home, "Sprint 4 goals: User authentication + profile management")?;
    ctx.stop(&home)?;

    println!("  {} Tutorial 5 complete", "Done:".green());
    Ok(())
}

/// Tutorial 6: Team collaboration with async context sharing
fn tutorial_06_team_handoff(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!("\n{}", "Tutorial 6: Team Handoff (Alice → Bob)".bold());

    // Alice's side
    let home_alice = homes.join("tutorial-06-team-alice");
    ctx.start(&home_alice, "payment-api-v2", &started_by("alice", "backend-services"))?;
    ctx.note(&home_alice, "API SPEC: POST /api/v2/payments/process")?;
    ctx.note(&home_alice, "Request body: { amount, currency, payment_method, customer_id }")?;
    ctx.note(&home_alice, "Response: { payment_id, status, transaction_id }")?;
    ctx.note(&home_alice, "DECISION: Using idempotency keys to prevent duplicate charges")?;
    ctx.note(&home_alice, "Idempotency key header: X-Idempotency-Key (UUID)")?;
    ctx.note(&home_alice, "Error handling: Return 400 for validation, 402 for payment failure")?;
    ctx.note(&home_alice, "Rate limiting: 100 requests/minute per customer")?;
    ctx.file(&home_alice, "internal/api/v2/payments.go")?;
    ctx.file(&home_alice, "docs/api/payment-endpoint-spec.md")?;
    ctx.stop(&home_alice)?;

    // Bob's side (references Alice's work)
    let home_bob = homes.join("tutorial-06-team-bob");
    ctx.start(&home_bob, "payment-ui-integration", &started_by("bob", "web-app"))?;
    ctx.note(&home_bob, "REF: Alice's payment API spec in docs/api/payment-endpoint-spec.md")?;
    ctx.note(&home_bob, "Implementing UI integration with POST /api/v2/payments/process")?;
    ctx.note(&home_bob, "Added UUID generation for X-Idempotency-Key header")?;
    ctx.note(&home_bob, "Error handling: Display user-friendly message for 400/402 errors")?;
    ctx.note(&home_bob, "Loading state: Show spinner during payment processing")?;
    ctx.file(&home_bob, "src/services/payment-api.ts")?;
    ctx.file(&home_bob, "src/components/PaymentProcessor.tsx")?;
    ctx.stop(&home_bob)?;

    println!("  {} Tutorial 6 complete", "Done:".green());
    Ok(())
}

/// Tutorial 7: Real-time coordination using signals
fn tutorial_07_signal_coordination(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!(
        "\n{}",
        "Tutorial 7: Signal Coordination (Alice, Bob, Carol, Eve)".bold()
    );

    // Alice (Backend)
    let home_alice = homes.join("tutorial-07-release-alice");
    ctx.start(&home_alice, "payment-api-release", &started_by("alice", "backend-services"))?;
    ctx.note(&home_alice, "Release: Payment API v2.0 to staging")?;
    ctx.note(&home_alice, "Endpoints ready: /process, /refund, /status")?;
    ctx.note(&home_alice, "Database migrations applied successfully")?;
    ctx.note(&home_alice, "Health check: ✅ All endpoints responding")?;
    ctx.signal_create(&home_alice, "api-v2-staging-ready")?;
    ctx.stop(&home_alice)?;

    // Bob (Frontend)
    let home_bob = homes.join("tutorial-07-release-bob");
    ctx.start(&home_bob, "frontend-integration", &started_by("bob", "web-app"))?;
    ctx.note(&home_bob, "Waiting for api-v2-staging-ready signal...")?;
    ctx.note(&home_bob, "Signal received! Starting integration work")?;
    ctx.note(&home_bob, "Integrated payment API v2.0 endpoints")?;
    ctx.note(&home_bob, "Manual testing: Payment flow working end-to-end")?;
    ctx.note(&home_bob, "Deployed to staging environment")?;
    ctx.signal_create(&home_bob, "frontend-staging-ready")?;
    ctx.stop(&home_bob)?;

    // Carol (QA)
    let home_carol = homes.join("tutorial-07-release-carol");
    ctx.start(&home_carol, "integration-testing", &started_by("carol", "qa-suite"))?;
    ctx.note(&home_carol, "Waiting for frontend-staging-ready signal...")?;
    ctx.note(&home_carol, "Signal received! Starting E2E tests")?;
    ctx.note(&home_carol, "✅ Test suite: payment-flow-e2e (15 tests passed)")?;
    ctx.note(&home_carol, "✅ Test: Process payment with valid card")?;
    ctx.note(&home_carol, "✅ Test: Handle invalid card gracefully")?;
    ctx.note(&home_carol, "✅ Test: Refund processed payment")?;
    ctx.note(&home_carol, "✅ Test: Check payment status")?;
    ctx.note(&home_carol, "All tests passed - staging environment approved")?;
    ctx.signal_create(&home_carol, "qa-approved-staging")?;
    ctx.stop(&home_carol)?;

    // Eve (Product Owner)
    let home_eve = homes.join("tutorial-07-release-eve");
    ctx.start(&home_eve, "release-coordination", &started_by("eve", "product"))?;
    ctx.note(&home_eve, "Release: Payment v2.0 feature")?;
    ctx.note(&home_eve, "Waiting for qa-approved-staging signal...")?;
    ctx.note(&home_eve, "QA approval received!")?;
    ctx.note(&home_eve, "DECISION: Release window - Friday 2pm PST")?;
    ctx.note(&home_eve, "Stakeholder notification sent")?;
    ctx.note(&home_eve, "Marketing: Blog post scheduled for Monday")?;
    ctx.note(&home_eve, "Support team: Training completed on new payment flow")?;
    ctx.stop(&home_eve)?;

    println!("  {} Tutorial 7 complete", "Done:".green());
    Ok(())
}

/// Tutorial 8: AI agents and automation as first-class context users
fn tutorial_08_agent_workflows(ctx: &MyContext, homes: &Path) -> Result<()> {
    println!(
        "\n{}",
        "Tutorial 8: Agent Workflows (Alice + Claude + CI/CD + QA Bot)".bold()
    );

    // Alice (Human)
    let home_alice = homes.join("tutorial-08-human-alice");
    ctx.start(
        &home_alice,
        "oauth-integration",
        &StartOptions {
            project: Some("backend-services".to_string()),
            labels: Some("feature,backend".to_string()),
            created_by: Some("alice".to_string()),
        },
    )?;
    ctx.note(&home_alice, "Implementing OAuth 2.0 client flow")?;
    ctx.note(&home_alice, "Providers: Google, GitHub")?;
    ctx.note(&home_alice, "Using authorization code flow with PKCE")?;
    ctx.stop(&home_alice)?;

    // Claude Code Agent
    let home_claude = homes.join("tutorial-08-agent-claude");
    ctx.start(
        &home_claude,
        "oauth-code-assistance",
        &started_by("claude-agent", "backend-services"),
    )?;
    ctx.note(&home_claude, "Parent context: oauth-integration (Alice)")?;
    ctx.note(&home_claude, "Generated OAuth client boilerplate code")?;
    ctx.note(
        &home_claude,
        "DECISION: Using golang.org/x/oauth2 library (official Google package)",
    )?;
    ctx.note(&home_claude, "Implemented token storage with encryption")?;
    ctx.note(&home_claude, "Added automatic token refresh logic")?;
    ctx.file(&home_claude, "internal/auth/oauth_client.go")?;
    ctx.file(&home_claude, "internal/auth/token_storage.go")?;
    ctx.signal_create(&home_claude, "code-ready-for-review")?;
    ctx.stop(&home_claude)?;

    // Alice reviews the agent's work
    ctx.start(
        &home_alice,
        "oauth-integration-review",
        &started_by("alice", "backend-services"),
    )?;
    ctx.note(&home_alice, "Reviewed Claude agent's generated code")?;
    ctx.note(&home_alice, "Code quality: Excellent, follows Go best practices")?;
    ctx.note(&home_alice, "Added error handling for network failures")?;
    ctx.note(&home_alice, "Added logging for OAuth flow debugging")?;
    ctx.signal_create(&home_alice, "feature-ready-for-ci")?;
    ctx.stop(&home_alice)?;

    // CI/CD Agent
    let home_cicd = homes.join("tutorial-08-agent-cicd");
    ctx.start(
        &home_cicd,
        "build-oauth-feature",
        &started_by("cicd-agent", "backend-services"),
    )?;
    ctx.note(&home_cicd, "Parent context: oauth-integration (Alice)")?;
    ctx.note(&home_cicd, "Build #5598 triggered by commit abc123def456")?;
    ctx.note(&home_cicd, "✅ Stage 1: Lint - No issues found")?;
    ctx.note(&home_cicd, "✅ Stage 2: Unit tests - 127/127 passed (0.8s)")?;
    ctx.note(&home_cicd, "✅ Stage 3: Integration tests - 43/43 passed (12.3s)")?;
    ctx.note(&home_cicd, "✅ Stage 4: Code coverage - 94.2% (target: 90%)")?;
    ctx.note(&home_cicd, "✅ Stage 5: Security scan - No vulnerabilities")?;
    ctx.note(&home_cicd, "Build artifacts uploaded to S3")?;
    ctx.signal_create(&home_cicd, "ci-build-passed")?;
    ctx.stop(&home_cicd)?;

    // QA Automation Bot
    let home_qa = homes.join("tutorial-08-agent-qa");
    ctx.start(&home_qa, "e2e-oauth-flow", &started_by("qa-bot", "qa-automation"))?;
    ctx.note(&home_qa, "Parent context: oauth-integration (Alice)")?;
    ctx.note(&home_qa, "Test suite: OAuth end-to-end flows")?;
    ctx.note(&home_qa, "✅ Test: Authorization code flow (Google)")?;
    ctx.note(&home_qa, "✅ Test: Authorization code flow (GitHub)")?;
    ctx.note(&home_qa, "✅ Test: Token refresh on expiry")?;
    ctx.note(&home_qa, "✅ Test: Handle invalid authorization code")?;
    ctx.note(&home_qa, "✅ Test: Handle expired refresh token")?;
    ctx.note(&home_qa, "Test duration: 45.2 seconds")?;
    ctx.note(&home_qa, "All tests passed - feature ready for production")?;
    ctx.signal_create(&home_qa, "qa-automated-passed")?;
    ctx.stop(&home_qa)?;

    // Alice final review
    ctx.start(
        &home_alice,
        "oauth-feature-complete",
        &started_by("alice", "backend-services"),
    )?;
    ctx.note(&home_alice, "All agents completed successfully:")?;
    ctx.note(&home_alice, "  ✅ Claude agent: Code generation")?;
    ctx.note(&home_alice, "  ✅ CI/CD agent: Build and tests")?;
    ctx.note(&home_alice, "  ✅ QA bot: E2E validation")?;
    ctx.note(&home_alice, "Feature ready for production deployment")?;
    ctx.note(&home_alice, "Deployment scheduled for: Tomorrow 10am PST")?;
    ctx.stop(&home_alice)?;

    println!("  {} Tutorial 8 complete", "Done:".green());
    Ok(())
}

/// Generate every tutorial context home
pub fn execute(bin: &Path, base: &Path) -> Result<()> {
    let homes = config::context_homes_dir(base);

    println!("{}", "=".repeat(70));
    println!("MY-CONTEXT TUTORIAL CONTEXT GENERATION");
    println!("{}", "=".repeat(70));
    println!("Context homes directory: {}", homes.display());

    if !bin.exists() {
        bail!("my-context not found at {}", bin.display());
    }

    let ctx = MyContext::new(bin.to_path_buf());
    println!("My-context binary: {}", ctx.bin().display());

    tutorial_01_backend_solo(&ctx, &homes)?;
    tutorial_02_frontend_solo(&ctx, &homes)?;
    tutorial_03_qa_solo(&ctx, &homes)?;
    tutorial_04_multi_project(&ctx, &homes)?;
    tutorial_05_scrum_master(&ctx, &homes)?;
    tutorial_06_team_handoff(&ctx, &homes)?;
    tutorial_07_signal_coordination(&ctx, &homes)?;
    tutorial_08_agent_workflows(&ctx, &homes)?;

    println!();
    println!("{}", "=".repeat(70));
    println!(
        "{} ALL TUTORIAL CONTEXTS GENERATED",
        "Done:".green()
    );
    println!("{}", "=".repeat(70));
    println!();
    println!("Context homes created in: {}", homes.display());
    println!("Next step: run the export command to generate HTML panels");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let result = execute(Path::new("/nonexistent/my-context"), tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_started_by_builds_options() {
        let options = started_by("alice", "payment-service");
        assert_eq!(options.created_by.as_deref(), Some("alice"));
        assert_eq!(options.project.as_deref(), Some("payment-service"));
        assert!(options.labels.is_none());
    }
}
