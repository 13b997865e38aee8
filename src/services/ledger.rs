// src/services/ledger.rs

// O agregador do caixa: filtro em memória + totais derivados. Assim como
// o núcleo da agenda, são funções puras sobre snapshots já carregados --
// chamadas repetidas com a mesma entrada dão o mesmo resultado.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::cash::{CashMovement, CashTotals, MovementFilter, MovementKind},
};

/// Início do dia (00:00 UTC). Os movimentos são armazenados em UTC, então
/// o recorte por dia também é em UTC.
pub fn day_start_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// `date_to` é inclusivo do dia INTEIRO: avançamos a borda para o início
/// do dia seguinte e comparamos com `<` estrito. Isso é política
/// documentada, não acidente do tipo de data.
pub fn day_end_exclusive_utc(date: NaiveDate) -> DateTime<Utc> {
    let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
    day_start_utc(next)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(movement: &CashMovement, filter: &MovementFilter) -> bool {
    if let Some(from) = filter.date_from {
        if movement.occurred_at < day_start_utc(from) {
            return false;
        }
    }

    if let Some(to) = filter.date_to {
        if movement.occurred_at >= day_end_exclusive_utc(to) {
            return false;
        }
    }

    // Texto livre contra o id do próprio movimento e o do turno vinculado
    if let Some(reference) = filter.reference.as_deref() {
        let id_match = contains_ci(&movement.id.to_string(), reference);
        let appointment_match = movement
            .appointment_id
            .map(|id| contains_ci(&id.to_string(), reference))
            .unwrap_or(false);
        if !id_match && !appointment_match {
            return false;
        }
    }

    if let Some(client) = filter.client.as_deref() {
        let client_match = movement
            .client_id
            .map(|id| contains_ci(&id.to_string(), client))
            .unwrap_or(false);
        if !client_match {
            return false;
        }
    }

    true
}

/// Aplica o filtro com semântica AND; campos ausentes não restringem nada.
pub fn filter_movements(movements: &[CashMovement], filter: &MovementFilter) -> Vec<CashMovement> {
    movements
        .iter()
        .filter(|m| matches(m, filter))
        .cloned()
        .collect()
}

/// Soma entradas e saídas e deriva o saldo. Um valor negativo é erro de
/// entrada (o sinal mora no `kind`), nunca coagido em silêncio.
pub fn aggregate(movements: &[CashMovement]) -> Result<CashTotals, AppError> {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;

    for movement in movements {
        if movement.amount.is_sign_negative() {
            return Err(AppError::InvalidInput(
                "movement amount must not be negative".to_string(),
            ));
        }
        match movement.kind {
            MovementKind::Income => income += movement.amount,
            MovementKind::Expense => expense += movement.amount,
        }
    }

    Ok(CashTotals { income, expense, balance: income - expense })
}

/// Variação percentual contra um período anterior. Denominador zero não é
/// divisão por zero nem infinito: é `None`, e quem exibe decide o que
/// mostrar no lugar.
pub fn percent_change(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    Some((current - previous) / previous * Decimal::from(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .expect("timestamp válido")
            .with_timezone(&Utc)
    }

    fn movement(amount: i64, kind: MovementKind, occurred_at: &str) -> CashMovement {
        CashMovement {
            id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
            occurred_at: at(occurred_at),
            amount: Decimal::from(amount),
            kind,
            description: "test".to_string(),
            appointment_id: None,
            client_id: None,
            created_at: at(occurred_at),
        }
    }

    #[test]
    fn aggregate_sums_by_kind() {
        let movements = vec![
            movement(100, MovementKind::Income, "2025-01-10T10:00:00Z"),
            movement(40, MovementKind::Expense, "2025-01-10T11:00:00Z"),
        ];

        let totals = aggregate(&movements).expect("agregação válida");
        assert_eq!(totals.income, Decimal::from(100));
        assert_eq!(totals.expense, Decimal::from(40));
        assert_eq!(totals.balance, Decimal::from(60));
    }

    #[test]
    fn balance_is_always_income_minus_expense() {
        let movements = vec![
            movement(250, MovementKind::Income, "2025-01-01T09:00:00Z"),
            movement(80, MovementKind::Expense, "2025-01-02T09:00:00Z"),
            movement(30, MovementKind::Expense, "2025-01-03T09:00:00Z"),
            movement(15, MovementKind::Income, "2025-01-04T09:00:00Z"),
        ];

        let totals = aggregate(&movements).expect("agregação válida");
        assert_eq!(totals.balance, totals.income - totals.expense);
    }

    #[test]
    fn empty_set_aggregates_to_zero() {
        let totals = aggregate(&[]).expect("agregação válida");
        assert_eq!(totals.income, Decimal::ZERO);
        assert_eq!(totals.expense, Decimal::ZERO);
        assert_eq!(totals.balance, Decimal::ZERO);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut bad = movement(10, MovementKind::Income, "2025-01-10T10:00:00Z");
        bad.amount = Decimal::from(-10);

        assert!(matches!(aggregate(&[bad]), Err(AppError::InvalidInput(_))));
    }

    // A borda `date_to` inclui o dia inteiro: 23:00 do dia 10 entra,
    // 00:00:01 do dia 11 fica fora.
    #[test]
    fn date_to_is_inclusive_of_the_whole_day() {
        let inside = movement(10, MovementKind::Income, "2025-01-10T23:00:00Z");
        let outside = movement(10, MovementKind::Income, "2025-01-11T00:00:01Z");
        let filter = MovementFilter {
            date_to: Some(NaiveDate::from_ymd_opt(2025, 1, 10).expect("data válida")),
            ..Default::default()
        };

        let kept = filter_movements(&[inside.clone(), outside], &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, inside.id);
    }

    #[test]
    fn date_from_cuts_earlier_days() {
        let early = movement(10, MovementKind::Income, "2025-01-09T23:59:59Z");
        let kept_one = movement(10, MovementKind::Income, "2025-01-10T00:00:00Z");
        let filter = MovementFilter {
            date_from: Some(NaiveDate::from_ymd_opt(2025, 1, 10).expect("data válida")),
            ..Default::default()
        };

        let kept = filter_movements(&[early, kept_one.clone()], &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, kept_one.id);
    }

    #[test]
    fn reference_filter_is_case_insensitive() {
        let mut with_appointment = movement(10, MovementKind::Income, "2025-01-10T10:00:00Z");
        let appointment_id = Uuid::new_v4();
        with_appointment.appointment_id = Some(appointment_id);

        let needle = appointment_id.to_string()[..8].to_uppercase();
        let filter = MovementFilter { reference: Some(needle), ..Default::default() };

        let kept = filter_movements(&[with_appointment.clone()], &filter);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let movements = vec![
            movement(10, MovementKind::Income, "2025-01-10T10:00:00Z"),
            movement(20, MovementKind::Expense, "2025-02-10T10:00:00Z"),
        ];

        let all = filter_movements(&movements, &MovementFilter::default());
        assert_eq!(all.len(), movements.len());
    }

    // Monotonicidade: filtrar nunca aumenta o conjunto
    #[test]
    fn any_filter_never_grows_the_set() {
        let movements = vec![
            movement(10, MovementKind::Income, "2025-01-10T10:00:00Z"),
            movement(20, MovementKind::Expense, "2025-02-10T10:00:00Z"),
            movement(30, MovementKind::Income, "2025-03-10T10:00:00Z"),
        ];
        let filters = [
            MovementFilter::default(),
            MovementFilter {
                date_from: Some(NaiveDate::from_ymd_opt(2025, 2, 1).expect("data válida")),
                ..Default::default()
            },
            MovementFilter { reference: Some("zzz".to_string()), ..Default::default() },
            MovementFilter { client: Some("abc".to_string()), ..Default::default() },
        ];

        let unfiltered = filter_movements(&movements, &MovementFilter::default()).len();
        for filter in &filters {
            assert!(filter_movements(&movements, filter).len() <= unfiltered);
        }
    }

    #[test]
    fn percent_change_with_zero_previous_is_undefined() {
        assert_eq!(percent_change(Decimal::from(50), Decimal::ZERO), None);
    }

    #[test]
    fn percent_change_computes_against_previous() {
        let change = percent_change(Decimal::from(150), Decimal::from(100))
            .expect("denominador não nulo");
        assert_eq!(change, Decimal::from(50));

        let drop = percent_change(Decimal::from(50), Decimal::from(100))
            .expect("denominador não nulo");
        assert_eq!(drop, Decimal::from(-50));
    }
}
