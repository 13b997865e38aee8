// src/services/availability.rs

// O núcleo da agenda: dado o horário de trabalho do dia, os turnos já
// marcados e os bloqueios, calcula os horários livres. É uma função pura
// sobre coleções já carregadas -- nada de I/O, nada de cache: cada
// chamada recalcula do zero sobre o snapshot recebido.

use chrono::{NaiveTime, Timelike};

use crate::{
    common::error::AppError,
    models::{
        appointment::{Appointment, AppointmentStatus, AvailabilityQuery, TimeRange},
        barber::BarberBlock,
    },
};

// Toda a aritmética de intervalos acontece em minutos desde a meia-noite,
// com semântica semiaberta [start, end): encostar não é sobrepor.
fn minutes(t: NaiveTime) -> i32 {
    (t.num_seconds_from_midnight() / 60) as i32
}

fn from_minutes(m: i32) -> NaiveTime {
    // m nasce de um NaiveTime válido somado a durações checadas contra o
    // fim do expediente, então está sempre em [0, 1440)
    NaiveTime::from_num_seconds_from_midnight_opt((m.max(0) as u32) * 60, 0)
        .unwrap_or(NaiveTime::MIN)
}

fn overlaps(a: (i32, i32), b: (i32, i32)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

fn validate(working_hours: &TimeRange, query: &AvailabilityQuery, granularity_minutes: i32) -> Result<(), AppError> {
    if working_hours.start >= working_hours.end {
        return Err(AppError::InvalidInput(
            "working hours start must be before end".to_string(),
        ));
    }
    if query.service_duration <= 0 {
        return Err(AppError::InvalidInput(
            "service duration must be positive".to_string(),
        ));
    }
    if granularity_minutes <= 0 {
        return Err(AppError::InvalidInput(
            "slot granularity must be positive".to_string(),
        ));
    }
    Ok(())
}

fn has_full_day_block(blocks: &[BarberBlock], query: &AvailabilityQuery) -> bool {
    blocks
        .iter()
        .any(|b| b.barber_id == query.barber_id && b.date == query.date && b.is_full_day())
}

// Monta o conjunto de intervalos ocupados do barbeiro no dia consultado:
// turnos não-cancelados (exceto o que está sendo remarcado) + bloqueios
// parciais.
fn occupied_intervals(
    appointments: &[Appointment],
    blocks: &[BarberBlock],
    query: &AvailabilityQuery,
) -> Vec<(i32, i32)> {
    let mut occupied: Vec<(i32, i32)> = Vec::new();

    for a in appointments {
        if a.branch_id != query.branch_id || a.barber_id != query.barber_id || a.date != query.date {
            continue;
        }
        if a.status == AppointmentStatus::Cancelled {
            continue;
        }
        if Some(a.id) == query.exclude_appointment_id {
            continue;
        }
        let start = minutes(a.start_time);
        occupied.push((start, start + a.duration_minutes));
    }

    for b in blocks {
        if b.barber_id != query.barber_id || b.date != query.date {
            continue;
        }
        if let (Some(start), Some(end)) = (b.start_time, b.end_time) {
            occupied.push((minutes(start), minutes(end)));
        }
    }

    merge_intervals(occupied)
}

// Ordena por início e funde sobrepostos/adjacentes (next.start <= cur.end)
fn merge_intervals(mut intervals: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    intervals.sort_by_key(|i| i.0);

    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.0 <= last.1 => {
                last.1 = last.1.max(interval.1);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Calcula os horários livres de um barbeiro num dia.
///
/// Um candidato `[t, t + duração)` entra no resultado sse cabe inteiro no
/// expediente e não sobrepõe nenhum intervalo ocupado. O passo entre
/// candidatos é a granularidade da sucursal -- sempre explícita.
/// Bloqueio de dia inteiro domina tudo: resultado vazio.
pub fn compute_available_slots(
    working_hours: &TimeRange,
    appointments: &[Appointment],
    blocks: &[BarberBlock],
    query: &AvailabilityQuery,
    granularity_minutes: i32,
) -> Result<Vec<TimeRange>, AppError> {
    validate(working_hours, query, granularity_minutes)?;

    if has_full_day_block(blocks, query) {
        return Ok(Vec::new());
    }

    let occupied = occupied_intervals(appointments, blocks, query);

    let day_start = minutes(working_hours.start);
    let day_end = minutes(working_hours.end);

    let mut slots = Vec::new();
    let mut t = day_start;
    while t + query.service_duration <= day_end {
        let candidate = (t, t + query.service_duration);
        if !occupied.iter().any(|o| overlaps(candidate, *o)) {
            slots.push(TimeRange {
                start: from_minutes(candidate.0),
                end: from_minutes(candidate.1),
            });
        }
        t += granularity_minutes;
    }

    Ok(slots)
}

/// Verifica se um horário específico está livre -- é o veto de conflito
/// usado na criação e remarcação de turnos. Compartilha a construção do
/// conjunto ocupado com `compute_available_slots` para que a listagem e
/// a reserva nunca divirjam.
pub fn is_interval_free(
    working_hours: &TimeRange,
    appointments: &[Appointment],
    blocks: &[BarberBlock],
    query: &AvailabilityQuery,
    start_time: NaiveTime,
) -> Result<bool, AppError> {
    validate(working_hours, query, 1)?;

    if has_full_day_block(blocks, query) {
        return Ok(false);
    }

    let start = minutes(start_time);
    let candidate = (start, start + query.service_duration);

    if candidate.0 < minutes(working_hours.start) || candidate.1 > minutes(working_hours.end) {
        return Ok(false);
    }

    let occupied = occupied_intervals(appointments, blocks, query);
    Ok(!occupied.iter().any(|o| overlaps(candidate, *o)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use uuid::Uuid;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("hora válida")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).expect("data válida")
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .expect("timestamp válido")
            .with_timezone(&Utc)
    }

    struct Ids {
        branch: Uuid,
        barber: Uuid,
    }

    fn ids() -> Ids {
        Ids { branch: Uuid::new_v4(), barber: Uuid::new_v4() }
    }

    fn appointment(ids: &Ids, start: NaiveTime, duration: i32) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            branch_id: ids.branch,
            barber_id: ids.barber,
            client_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            date: date(),
            start_time: start,
            duration_minutes: duration,
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn partial_block(ids: &Ids, start: NaiveTime, end: NaiveTime) -> BarberBlock {
        BarberBlock {
            id: Uuid::new_v4(),
            barber_id: ids.barber,
            date: date(),
            start_time: Some(start),
            end_time: Some(end),
            reason: None,
            created_at: now(),
        }
    }

    fn full_day_block(ids: &Ids) -> BarberBlock {
        BarberBlock {
            id: Uuid::new_v4(),
            barber_id: ids.barber,
            date: date(),
            start_time: None,
            end_time: None,
            reason: None,
            created_at: now(),
        }
    }

    fn query(ids: &Ids, duration: i32) -> AvailabilityQuery {
        AvailabilityQuery {
            branch_id: ids.branch,
            barber_id: ids.barber,
            date: date(),
            service_duration: duration,
            exclude_appointment_id: None,
        }
    }

    fn working_hours() -> TimeRange {
        TimeRange { start: t(9, 0), end: t(18, 0) }
    }

    fn starts(slots: &[TimeRange]) -> Vec<NaiveTime> {
        slots.iter().map(|s| s.start).collect()
    }

    #[test]
    fn day_without_bookings_is_fully_sliced() {
        let ids = ids();
        let slots =
            compute_available_slots(&working_hours(), &[], &[], &query(&ids, 30), 30)
                .expect("cálculo válido");

        // 09:00..17:30 em passos de 30: 18 candidatos
        assert_eq!(slots.len(), 18);
        assert_eq!(slots[0].start, t(9, 0));
        assert_eq!(slots[17].start, t(17, 30));
    }

    // O cenário de referência: turno 10:00-10:30 + bloqueio 14:00-15:00
    // tiram exatamente 10:00, 14:00 e 14:30 da lista.
    #[test]
    fn booked_and_blocked_slots_are_skipped() {
        let ids = ids();
        let appointments = vec![appointment(&ids, t(10, 0), 30)];
        let blocks = vec![partial_block(&ids, t(14, 0), t(15, 0))];

        let slots = compute_available_slots(
            &working_hours(),
            &appointments,
            &blocks,
            &query(&ids, 30),
            30,
        )
        .expect("cálculo válido");

        let starts = starts(&slots);
        assert!(!starts.contains(&t(10, 0)));
        assert!(!starts.contains(&t(14, 0)));
        assert!(!starts.contains(&t(14, 30)));
        // Os vizinhos imediatos continuam livres (semiaberto: encostar vale)
        assert!(starts.contains(&t(9, 30)));
        assert!(starts.contains(&t(10, 30)));
        assert!(starts.contains(&t(13, 30)));
        assert!(starts.contains(&t(15, 0)));
        assert_eq!(slots.len(), 15);
    }

    #[test]
    fn full_day_block_dominates_everything() {
        let ids = ids();
        let appointments = vec![appointment(&ids, t(10, 0), 30)];
        let blocks = vec![full_day_block(&ids), partial_block(&ids, t(14, 0), t(15, 0))];

        let slots = compute_available_slots(
            &working_hours(),
            &appointments,
            &blocks,
            &query(&ids, 30),
            30,
        )
        .expect("cálculo válido");

        assert!(slots.is_empty());
    }

    #[test]
    fn excluded_appointment_frees_its_own_slot() {
        let ids = ids();
        let existing = appointment(&ids, t(10, 0), 30);
        let mut q = query(&ids, 30);
        q.exclude_appointment_id = Some(existing.id);

        let slots =
            compute_available_slots(&working_hours(), &[existing], &[], &q, 30)
                .expect("cálculo válido");

        assert!(starts(&slots).contains(&t(10, 0)));
    }

    #[test]
    fn cancelled_appointments_do_not_occupy() {
        let ids = ids();
        let mut cancelled = appointment(&ids, t(10, 0), 30);
        cancelled.status = AppointmentStatus::Cancelled;

        let slots =
            compute_available_slots(&working_hours(), &[cancelled], &[], &query(&ids, 30), 30)
                .expect("cálculo válido");

        assert!(starts(&slots).contains(&t(10, 0)));
    }

    #[test]
    fn other_barber_bookings_are_ignored() {
        let ids = ids();
        let other = Ids { branch: ids.branch, barber: Uuid::new_v4() };
        let appointments = vec![appointment(&other, t(10, 0), 30)];

        let slots = compute_available_slots(
            &working_hours(),
            &appointments,
            &[],
            &query(&ids, 30),
            30,
        )
        .expect("cálculo válido");

        assert_eq!(slots.len(), 18);
    }

    #[test]
    fn overlapping_occupied_intervals_are_merged() {
        let ids = ids();
        // 10:00-11:00 e 10:30-11:30 fundem num único 10:00-11:30
        let appointments = vec![
            appointment(&ids, t(10, 0), 60),
            appointment(&ids, t(10, 30), 60),
        ];

        let slots = compute_available_slots(
            &working_hours(),
            &appointments,
            &[],
            &query(&ids, 30),
            30,
        )
        .expect("cálculo válido");

        let starts = starts(&slots);
        assert!(!starts.contains(&t(10, 0)));
        assert!(!starts.contains(&t(10, 30)));
        assert!(!starts.contains(&t(11, 0)));
        assert!(starts.contains(&t(11, 30)));
    }

    #[test]
    fn no_slot_overlaps_any_occupied_interval() {
        let ids = ids();
        let appointments = vec![
            appointment(&ids, t(9, 45), 30),
            appointment(&ids, t(12, 0), 90),
        ];
        let blocks = vec![partial_block(&ids, t(16, 0), t(16, 45))];

        let slots = compute_available_slots(
            &working_hours(),
            &appointments,
            &blocks,
            &query(&ids, 45),
            15,
        )
        .expect("cálculo válido");

        let occupied = [(9 * 60 + 45, 10 * 60 + 15), (12 * 60, 13 * 60 + 30), (16 * 60, 16 * 60 + 45)];
        for slot in &slots {
            let s = (minutes(slot.start), minutes(slot.end));
            for o in occupied {
                assert!(!overlaps(s, o), "slot {:?} sobrepõe {:?}", slot, o);
            }
        }
    }

    #[test]
    fn repeated_calls_return_the_same_result() {
        let ids = ids();
        let appointments = vec![appointment(&ids, t(10, 0), 30)];
        let q = query(&ids, 30);

        let first =
            compute_available_slots(&working_hours(), &appointments, &[], &q, 30)
                .expect("cálculo válido");
        let second =
            compute_available_slots(&working_hours(), &appointments, &[], &q, 30)
                .expect("cálculo válido");

        assert_eq!(first, second);
    }

    #[test]
    fn slot_must_fit_inside_working_hours() {
        let ids = ids();
        // Expediente curto: 09:00-10:00 com serviço de 45min e passo 30
        let wh = TimeRange { start: t(9, 0), end: t(10, 0) };
        let slots = compute_available_slots(&wh, &[], &[], &query(&ids, 45), 30)
            .expect("cálculo válido");

        // 09:30 + 45min estouraria as 10:00
        assert_eq!(starts(&slots), vec![t(9, 0)]);
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        let ids = ids();
        let result =
            compute_available_slots(&working_hours(), &[], &[], &query(&ids, 0), 30);

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn inverted_working_hours_are_rejected() {
        let ids = ids();
        let wh = TimeRange { start: t(18, 0), end: t(9, 0) };
        let result = compute_available_slots(&wh, &[], &[], &query(&ids, 30), 30);

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn interval_free_respects_adjacency() {
        let ids = ids();
        let appointments = vec![appointment(&ids, t(10, 0), 30)];
        let q = query(&ids, 30);

        // Encostar no fim do turno existente é permitido (semiaberto)
        let free = is_interval_free(&working_hours(), &appointments, &[], &q, t(10, 30))
            .expect("cálculo válido");
        assert!(free);

        // Sobrepor um minuto que seja, não
        let busy = is_interval_free(&working_hours(), &appointments, &[], &q, t(9, 45))
            .expect("cálculo válido");
        assert!(!busy);
    }

    #[test]
    fn interval_free_rejects_outside_working_hours() {
        let ids = ids();
        let q = query(&ids, 30);

        let free = is_interval_free(&working_hours(), &[], &[], &q, t(17, 45))
            .expect("cálculo válido");
        assert!(!free);
    }
}
