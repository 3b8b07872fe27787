use crate::components::accordion::AccordionEntry;

pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        icon: "🖱️",
        title: "Wähle dein Ziel",
        description: "Starte mit klaren Lernpfaden für Web, Data oder Automation.",
    },
    Step {
        icon: "</>",
        title: "Code. Test. Verstehe.",
        description: "Mini-Lektionen plus Live-Konsole geben dir sofort Feedback.",
    },
    Step {
        icon: "✔",
        title: "Baue dein Projekt",
        description: "In weniger als 6 Wochen steht dein erstes sichtbares Portfolio-Projekt.",
    },
];

pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const SOCIAL_PROOF: [Stat; 3] = [
    Stat { icon: "👥", label: "Lernende", value: "12.500+" },
    Stat { icon: "🏆", label: "Kursrating", value: "4.9/5" },
    Stat { icon: "✔", label: "Completion", value: "87%" },
];

pub struct CurriculumModule {
    pub title: &'static str,
    pub level: &'static str,
}

pub const CURRICULUM: [CurriculumModule; 3] = [
    CurriculumModule { title: "Foundations", level: "HTML, CSS & Logik" },
    CurriculumModule { title: "Interaktion", level: "JavaScript Basics" },
    CurriculumModule { title: "Dein erstes Projekt", level: "Mini-App mit React" },
];

pub static FAQ: [AccordionEntry; 3] = [
    AccordionEntry {
        value: "beginner",
        question: "Ist CodeLumen für absolute Beginner:innen geeignet?",
        answer: "Ja. Du benötigst keine Vorerfahrung – wir starten bei Null und führen dich mit Erklärvideos, Übungen und Sofort-Feedback durch die Grundlagen.",
    },
    AccordionEntry {
        value: "zeit",
        question: "Wie viel Zeit muss ich investieren?",
        answer: "Plane 20 bis 30 Minuten pro Tag ein. Bereits nach der ersten Session baust du eine sichtbare Ausgabe in der Live-Konsole.",
    },
    AccordionEntry {
        value: "support",
        question: "Gibt es Community-Support?",
        answer: "Ja. Du erhältst Zugang zu unserer betreuten Discord-Community mit täglichen Check-ins und wöchentlichen Q&A-Sessions.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_values_are_unique() {
        let mut values: Vec<_> = FAQ.iter().map(|entry| entry.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), FAQ.len());
    }
}
