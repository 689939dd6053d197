//! Prompt construction for the generation service.
//!
//! [`build_prompt`] renders a fixed Portuguese template with the request
//! fields substituted. It is a pure function: the same request always yields
//! the same prompt.

use crate::models::PlanRequest;

const PREAMBLE: &str = "Você é um nutricionista e chef de cozinha virtual especializado em criar cardápios semanais personalizados, chamado NutriPlanner AI.";

const DEFAULT_LIKES: &str = "Nenhuma específica, mas priorize variedade e sabor.";
const DEFAULT_DISLIKES: &str = "Nenhuma específica.";
const DEFAULT_PANTRY: &str = "Nenhum específico, utilize ingredientes comuns e acessíveis.";

const QUALITY_REQUIREMENTS: [&str; 6] = [
    "\nO cardápio deve ser:",
    "- Balanceado, nutritivo e saboroso.",
    "- Variado, evitando repetições excessivas de pratos principais nos mesmos dias ou dias seguidos, a menos que seja prático (ex: sobras para o almoço do dia seguinte).",
    "- Com sugestões de pratos e preparações que sejam relativamente fáceis ou de complexidade média, adequados para o dia a dia.",
    "- Para cada refeição, sugira o prato principal e, se aplicável, acompanhamentos ou complementos.",
    "- Se o objetivo for perda de peso ou ganho de massa, tente adequar as sugestões, mas sem prescrever calorias exatas (apenas direcione para alimentos mais leves ou mais proteicos, conforme o caso).",
];

const SHOPPING_LIST: [&str; 5] = [
    "\nAo final do cardápio, adicione uma seção chamada '**Lista de Compras Sugerida:**'",
    "Nesta seção, liste os principais ingredientes frescos e chave (vegetais, frutas, proteínas, laticínios/alternativas) necessários para preparar as refeições do cardápio gerado.",
    "Não precisa listar temperos básicos como sal, pimenta, azeite, a menos que seja algo muito específico.",
    "Organize a lista de compras por categorias (Ex: Vegetais, Frutas, Proteínas, Grãos/Carboidratos, Laticínios/Outros) para facilitar.",
    "O tom deve ser amigável, encorajador e profissional.",
];

const HEALTH_HEADER: &str = "\nConsiderações Especiais de Saúde (baseadas no objetivo):";

const CONFLICT_INSTRUCTION: &str = "\nIMPORTANTE: Se o usuário listar preferências alimentares que são claramente contraindicadas para o objetivo de saúde selecionado (ex: doces para diabéticos, alimentos salgados para hipertensos), o cardápio NÃO deve incluir esses alimentos. Em vez disso, após gerar o cardápio adequado, adicione uma seção de ALERTA ao final, explicando de forma amigável por que certos alimentos preferidos não foram incluídos e sugerindo alternativas saudáveis se possível.";

/// Builds the instruction sent to the generation service for `request`.
///
/// # Examples
///
/// ```rust
/// use nutriplanner_core::{build_prompt, params::PlanForm};
///
/// let request = PlanForm::default().to_request()?;
/// let prompt = build_prompt(&request);
/// assert!(prompt.contains("para 3 dias"));
/// assert!(prompt.contains("Lista de Compras Sugerida"));
/// # Ok::<(), nutriplanner_core::PlannerError>(())
/// ```
pub fn build_prompt(request: &PlanRequest) -> String {
    let mut parts: Vec<String> = vec![
        PREAMBLE.to_string(),
        format!(
            "Por favor, crie um plano de refeições detalhado para {} dias, incluindo as seguintes refeições: {}.",
            request.day_count,
            request.meals.join(", ")
        ),
        format!("O objetivo principal do usuário é: {}.", request.goal.label()),
        format!(
            "Preferências alimentares (alimentos que gosta): {}.",
            or_default(&request.likes, DEFAULT_LIKES)
        ),
        format!(
            "Restrições, alergias ou alimentos a evitar: {}.",
            or_default(&request.dislikes, DEFAULT_DISLIKES)
        ),
        format!(
            "Ingredientes que o usuário já tem em casa e gostaria de aproveitar (se possível): {}.",
            or_default(&request.pantry_items, DEFAULT_PANTRY)
        ),
    ];

    parts.extend(QUALITY_REQUIREMENTS.iter().map(ToString::to_string));

    parts.push("\nApresente o cardápio de forma clara e organizada, dia por dia e refeição por refeição. Use markdown para formatação (negrito para dias e refeições).".to_string());
    parts.push("Exemplo de formato para cada dia:".to_string());
    parts.push("**Dia 1:**".to_string());
    parts.push(example_line(request, 0, "Refeição 1"));
    parts.push(example_line(request, 1, "Refeição 2"));
    parts.push("  ...".to_string());

    parts.extend(SHOPPING_LIST.iter().map(ToString::to_string));

    if let Some(clause) = request.goal.health_clause() {
        parts.push(HEALTH_HEADER.to_string());
        parts.push(clause.to_string());
    }

    parts.push(CONFLICT_INSTRUCTION.to_string());
    parts.join("\n")
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn example_line(request: &PlanRequest, index: usize, placeholder: &str) -> String {
    let meal = request
        .meals
        .get(index)
        .map_or(placeholder, String::as_str);
    format!("  - **{meal}**: [Sugestão detalhada do prato]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn create_test_request(goal: Goal) -> PlanRequest {
        PlanRequest {
            period_label: "5 dias".to_string(),
            day_count: 5,
            meals: vec![
                "Almoço".to_string(),
                "Jantar".to_string(),
                "Ceia".to_string(),
            ],
            goal,
            likes: "frango grelhado, doces".to_string(),
            dislikes: "lactose".to_string(),
            pantry_items: "arroz, feijão".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_request_fields() {
        let prompt = build_prompt(&create_test_request(Goal::WeightLoss));
        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.contains("para 5 dias"));
        assert!(prompt.contains("refeições: Almoço, Jantar, Ceia."));
        assert!(prompt.contains("O objetivo principal do usuário é: Perda de Peso (Déficit Calórico Leve)."));
        assert!(prompt.contains("(alimentos que gosta): frango grelhado, doces."));
        assert!(prompt.contains("alimentos a evitar: lactose."));
        assert!(prompt.contains("(se possível): arroz, feijão."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = create_test_request(Goal::Budget);
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_empty_free_text_uses_defaults() {
        let mut request = create_test_request(Goal::GeneralHealth);
        request.likes.clear();
        request.dislikes.clear();
        request.pantry_items.clear();

        let prompt = build_prompt(&request);
        assert!(prompt.contains(&format!("(alimentos que gosta): {DEFAULT_LIKES}.")));
        assert!(prompt.contains(&format!("alimentos a evitar: {DEFAULT_DISLIKES}.")));
        assert!(prompt.contains(&format!("(se possível): {DEFAULT_PANTRY}.")));
    }

    #[test]
    fn test_example_uses_first_two_meals() {
        let prompt = build_prompt(&create_test_request(Goal::GeneralHealth));
        assert!(prompt.contains("**Dia 1:**\n  - **Almoço**: [Sugestão detalhada do prato]\n  - **Jantar**: [Sugestão detalhada do prato]\n  ..."));
        assert!(!prompt.contains("Refeição 1"));
    }

    #[test]
    fn test_example_falls_back_to_placeholder() {
        let mut request = create_test_request(Goal::GeneralHealth);
        request.meals = vec!["Jantar".to_string()];

        let prompt = build_prompt(&request);
        assert!(prompt.contains("  - **Jantar**: [Sugestão detalhada do prato]"));
        assert!(prompt.contains("  - **Refeição 2**: [Sugestão detalhada do prato]"));
        assert!(!prompt.contains("Refeição 1"));
    }

    #[test]
    fn test_shopping_list_and_conflict_instruction_always_present() {
        for goal in Goal::ALL {
            let prompt = build_prompt(&create_test_request(goal));
            assert!(prompt.contains("'**Lista de Compras Sugerida:**'"));
            assert!(prompt.ends_with(CONFLICT_INSTRUCTION));
        }
    }

    #[test]
    fn test_health_clauses_only_for_health_goals() {
        let diabetes = Goal::DiabetesControl.health_clause().unwrap();
        let hypertension = Goal::HypertensionControl.health_clause().unwrap();

        for goal in Goal::ALL {
            let prompt = build_prompt(&create_test_request(goal));
            assert_eq!(prompt.contains(diabetes), goal == Goal::DiabetesControl);
            assert_eq!(
                prompt.contains(hypertension),
                goal == Goal::HypertensionControl
            );
            assert_eq!(prompt.contains(HEALTH_HEADER), goal.health_clause().is_some());
        }
    }

    #[test]
    fn test_lines_are_newline_joined() {
        let prompt = build_prompt(&create_test_request(Goal::GeneralHealth));
        assert!(prompt.contains("doces.\nRestrições"));
        assert!(prompt.contains("profissional.\n\nIMPORTANTE:"));
    }
}
