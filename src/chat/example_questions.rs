#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleQuestion {
    pub icon: &'static str,
    pub question: &'static str,
    pub category: &'static str,
}

pub const EXAMPLE_QUESTIONS: [ExampleQuestion; 4] = [
    ExampleQuestion {
        icon: "💼",
        question: "Quels sont mes droits en cas de licenciement ?",
        category: "Droit du travail",
    },
    ExampleQuestion {
        icon: "📄",
        question: "Comment rédiger un contrat de travail ?",
        category: "Contrats",
    },
    ExampleQuestion {
        icon: "🏢",
        question: "Quelles sont les étapes pour créer une entreprise ?",
        category: "Droit des affaires",
    },
    ExampleQuestion {
        icon: "🛡️",
        question: "Comment protéger mes droits de propriété intellectuelle ?",
        category: "Propriété intellectuelle",
    },
];

pub fn panel_heading(has_messages: bool) -> &'static str {
    if has_messages {
        "Choisissez une autre question"
    } else {
        "Posez votre question ou choisissez un exemple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_are_sendable_as_is() {
        for example in EXAMPLE_QUESTIONS {
            assert_eq!(example.question, example.question.trim());
            assert!(!example.question.is_empty());
        }
    }
}
