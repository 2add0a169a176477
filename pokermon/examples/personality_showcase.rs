//! Personality Showcase Example
//!
//! Shows how different personalities weigh the same situation.

use pokermon::ai::{DecisionConfig, GameContext, PersonalityTable, PersonalityTraits, probability};
use pokermon::{DecisionEngine, Player};

fn main() {
    println!("=== Pokermon Personality Showcase ===\n");

    let table = PersonalityTable::standard();
    let config = DecisionConfig::default();
    let ctx = GameContext::simple(100, 300);

    // Example 1: Derived traits
    println!("Example 1: Derived traits");
    for name in ["Meek", "Happy", "Brash", "Brainy"] {
        if let Some(profile) = table.get(name) {
            println!(
                "{:<8} aggression {:.1}  bluff {:.1}  fold {:.1}  deception {:.1}",
                profile.name(),
                profile.aggressiveness(),
                profile.bluff_tendency(),
                profile.fold_tendency(),
                profile.deception()
            );
            println!("         {}", PersonalityTraits::from_profile(profile));
        }
    }

    // Example 2: Action probabilities for a weak and a strong hand
    println!("\nExample 2: Probabilities at bet $100, pot $300");
    for strength in [0.2, 0.9] {
        println!("Hand strength {strength}:");
        for name in ["Meek", "Happy", "Brash"] {
            if let Some(profile) = table.get(name) {
                let dist =
                    probability::compute_weights(&config, profile, &ctx, strength, false).normalize();
                println!(
                    "  {:<8} fold {:>5.1}%  call {:>5.1}%  raise {:>5.1}%",
                    name,
                    dist.fold * 100.0,
                    dist.call * 100.0,
                    dist.raise * 100.0
                );
            }
        }
    }

    // Example 3: Seeded bets
    println!("\nExample 3: Ten seeded decisions for Foolhardy with a strong hand");
    let mut engine = DecisionEngine::with_seed(42);
    let player = Player::ai("Bot", 1000);
    if let Some(profile) = table.get("Foolhardy") {
        let bets: Vec<String> = (0..10)
            .filter_map(|_| engine.decide(player.chips, profile, &ctx, 0.9))
            .map(|d| format!("{} ${}", d.action, d.amount))
            .collect();
        println!("{}", bets.join(", "));
    }
}
