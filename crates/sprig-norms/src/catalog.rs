use sprig_core::models::milestone::{DevelopmentalDomain, Milestone};

/// The milestone catalog shipped with Sprig: a representative set across
/// all six domains, with typical achievement ages in months. Persistence of
/// larger, study-specific catalogs lives outside this crate; callers can
/// score against any milestone set they supply.
pub fn bundled() -> &'static [Milestone] {
    static CATALOG: std::sync::LazyLock<Vec<Milestone>> = std::sync::LazyLock::new(|| {
        let entries: [(DevelopmentalDomain, &str, f64); 24] = [
            (DevelopmentalDomain::GrossMotor, "Rolls from back to side", 4.0),
            (DevelopmentalDomain::GrossMotor, "Sits without support", 7.0),
            (DevelopmentalDomain::GrossMotor, "Walks alone", 13.0),
            (DevelopmentalDomain::GrossMotor, "Runs well without falling", 24.0),
            (DevelopmentalDomain::GrossMotor, "Jumps with both feet off the floor", 30.0),
            (DevelopmentalDomain::FineMotor, "Grasps a rattle placed in hand", 4.0),
            (DevelopmentalDomain::FineMotor, "Picks up small object with pincer grip", 10.0),
            (DevelopmentalDomain::FineMotor, "Stacks two blocks", 15.0),
            (DevelopmentalDomain::FineMotor, "Scribbles spontaneously", 18.0),
            (DevelopmentalDomain::FineMotor, "Draws a circle after demonstration", 36.0),
            (DevelopmentalDomain::Language, "Babbles with consonant sounds", 7.0),
            (DevelopmentalDomain::Language, "Points to ask for something", 12.0),
            (DevelopmentalDomain::Language, "Says first word with meaning", 12.0),
            (DevelopmentalDomain::Language, "Combines two words into a sentence", 21.0),
            (DevelopmentalDomain::Language, "Asks simple questions", 30.0),
            (DevelopmentalDomain::Social, "Smiles responsively", 2.0),
            (DevelopmentalDomain::Social, "Plays peek-a-boo", 9.0),
            (DevelopmentalDomain::Social, "Shares a toy when asked", 24.0),
            (DevelopmentalDomain::Social, "Engages in pretend play with others", 30.0),
            (DevelopmentalDomain::Cognitive, "Explores objects by mouthing and banging", 6.0),
            (DevelopmentalDomain::Cognitive, "Imitates a simple gesture", 10.0),
            (DevelopmentalDomain::Cognitive, "Sorts shapes into a form board", 24.0),
            (DevelopmentalDomain::Adaptive, "Feeds self with a spoon", 15.0),
            (DevelopmentalDomain::Adaptive, "Dresses with supervision", 30.0),
        ];

        entries
            .iter()
            .map(|&(domain, description, typical_age_months)| Milestone {
                domain,
                description: description.to_string(),
                typical_age_months,
            })
            .collect()
    });
    &CATALOG
}

/// Catalog entries for one domain.
pub fn for_domain(domain: DevelopmentalDomain) -> Vec<&'static Milestone> {
    bundled().iter().filter(|m| m.domain == domain).collect()
}
