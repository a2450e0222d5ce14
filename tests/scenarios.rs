//! End-to-end scenarios through the public API.

use pretty_assertions::assert_eq;
use u_cpusched::models::{ProcessSet, Slice};
use u_cpusched::scheduler::{build_schedule, compute_metrics, run_all, simulate, Discipline};
use u_cpusched::SimulationError;

fn two_at_zero() -> ProcessSet {
    ProcessSet::new(2, vec![(0, 5), (0, 3)]).unwrap()
}

#[test]
fn test_fifo_two_processes() {
    let schedule = build_schedule(&two_at_zero(), Discipline::Fifo);
    assert_eq!(schedule.start, vec![0, 5]);
    assert_eq!(schedule.finish, vec![5, 8]);
}

#[test]
fn test_sjf_shortest_duration_wins_regardless_of_index() {
    let schedule = build_schedule(&two_at_zero(), Discipline::Sjf);
    assert_eq!(schedule.start, vec![3, 0]);
    assert_eq!(schedule.finish, vec![8, 3]);
}

#[test]
fn test_rr_single_process() {
    let set = ProcessSet::new(2, vec![(0, 4)]).unwrap();
    let schedule = build_schedule(&set, Discipline::RoundRobin);
    assert_eq!(schedule.start, vec![0]);
    assert_eq!(schedule.finish, vec![4]);
    assert_eq!(schedule.slices, vec![Slice::new(0, 0, 2), Slice::new(0, 2, 4)]);

    let metrics = compute_metrics(&set, &schedule).unwrap();
    assert_eq!(metrics.avg_response, 0.0);
    assert_eq!(metrics.avg_turnaround, 4.0);
}

#[test]
fn test_empty_set_signals_empty_input() {
    let set = ProcessSet::new(2, Vec::<(i64, i64)>::new()).unwrap();
    let schedule = build_schedule(&set, Discipline::Fifo);
    assert_eq!(compute_metrics(&set, &schedule), Err(SimulationError::EmptyInput));
    assert_eq!(run_all(&set), Err(SimulationError::EmptyInput));
}

#[test]
fn test_invalid_input_rejected_before_simulation() {
    assert_eq!(
        ProcessSet::new(0, vec![(0, 1)]),
        Err(SimulationError::InvalidQuantum { quantum: 0 })
    );
    assert!(matches!(
        ProcessSet::new(1, vec![(-2, 1)]),
        Err(SimulationError::InvalidProcess { index: 0, arrival: -2, .. })
    ));
    assert!(matches!(
        ProcessSet::new(1, vec![(0, 1), (0, -1)]),
        Err(SimulationError::InvalidProcess { index: 1, duration: -1, .. })
    ));
}

#[test]
fn test_overflowing_horizon_rejected() {
    assert_eq!(
        ProcessSet::new(1, vec![(i64::MAX, 1)]),
        Err(SimulationError::HorizonOverflow {
            max_arrival: i64::MAX
        })
    );
    assert_eq!(
        ProcessSet::new(1, vec![(0, i64::MAX), (0, 1)]),
        Err(SimulationError::HorizonOverflow { max_arrival: 0 })
    );
}

#[test]
fn test_clock_reaches_i64_max() {
    let late = i64::MAX - 10;
    let set = ProcessSet::new(3, vec![(late, 4), (late, 6)]).unwrap();
    let [fifo, sjf, srt, rr] = run_all(&set).unwrap();

    for metrics in [fifo, sjf, srt] {
        assert!((metrics.avg_response - 2.0).abs() < 1e-10);
        assert!((metrics.avg_turnaround - 7.0).abs() < 1e-10);
    }
    // RR q=3: P0 late..+3, P1 +3..+6, P0 +6..+7, P1 +7..+10
    assert!((rr.avg_response - 1.5).abs() < 1e-10);
    assert!((rr.avg_waiting - 3.5).abs() < 1e-10);
    assert!((rr.avg_turnaround - 8.5).abs() < 1e-10);
    assert_eq!(build_schedule(&set, Discipline::RoundRobin).makespan(), i64::MAX);
}

#[test]
fn test_mixed_workload_all_disciplines() {
    // Arrivals 0,1,2,3; durations 8,4,9,5; quantum 4.
    let set = ProcessSet::new(4, vec![(0, 8), (1, 4), (2, 9), (3, 5)]).unwrap();

    let fifo = build_schedule(&set, Discipline::Fifo);
    assert_eq!(fifo.start, vec![0, 8, 12, 21]);
    assert_eq!(fifo.finish, vec![8, 12, 21, 26]);

    let sjf = build_schedule(&set, Discipline::Sjf);
    // P0 0..8, P1 8..12, P3 12..17, P2 17..26
    assert_eq!(sjf.start, vec![0, 8, 17, 12]);
    assert_eq!(sjf.finish, vec![8, 12, 26, 17]);

    let srt = build_schedule(&set, Discipline::Srt);
    assert_eq!(srt.start, vec![0, 1, 17, 5]);
    assert_eq!(srt.finish, vec![17, 5, 26, 10]);

    let rr = build_schedule(&set, Discipline::RoundRobin);
    // P0 0..4 | P1 4..8 | P2 8..12 | P3 12..16 | P0 16..20 | P2 20..24 | P3 24..25 | P2 25..26
    assert_eq!(rr.start, vec![0, 4, 8, 12]);
    assert_eq!(rr.finish, vec![20, 8, 26, 25]);

    let [m_fifo, m_sjf, m_srt, m_rr] = run_all(&set).unwrap();
    assert!((m_fifo.avg_response - 8.75).abs() < 1e-10); // (0+7+10+18)/4
    assert!((m_fifo.avg_turnaround - 15.25).abs() < 1e-10); // (8+11+19+23)/4
    assert!((m_sjf.avg_response - 7.75).abs() < 1e-10); // (0+7+15+9)/4
    assert!((m_srt.avg_turnaround - 13.0).abs() < 1e-10); // (17+4+24+7)/4
    assert!((m_rr.avg_response - 4.5).abs() < 1e-10); // (0+3+6+9)/4
    assert!((m_rr.avg_turnaround - 18.25).abs() < 1e-10); // (20+7+24+22)/4
}

#[test]
fn test_reports_follow_discipline_order() {
    let reports = simulate(&two_at_zero()).unwrap();
    let order: Vec<Discipline> = reports.iter().map(|r| r.discipline).collect();
    assert_eq!(order, Discipline::ALL.to_vec());
}

#[test]
fn test_process_set_json() {
    let set: ProcessSet =
        serde_json::from_str(r#"{"quantum":3,"processes":[{"arrival":0,"duration":2}]}"#).unwrap();
    assert_eq!(set.quantum(), 3);
    assert_eq!(set.len(), 1);

    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json["processes"][0]["duration"], 2);
}

#[test]
fn test_process_set_json_is_validated() {
    let result: Result<ProcessSet, _> =
        serde_json::from_str(r#"{"quantum":0,"processes":[{"arrival":0,"duration":2}]}"#);
    assert!(result.unwrap_err().to_string().contains("invalid quantum"));
}

#[test]
fn test_metrics_json_shape() {
    let [fifo, ..] = run_all(&two_at_zero()).unwrap();
    let json = serde_json::to_value(fifo).unwrap();
    assert_eq!(json["avg_response"], 2.5);
    assert_eq!(json["avg_turnaround"], 6.5);
    assert_eq!(serde_json::to_value(Discipline::RoundRobin).unwrap(), "round_robin");
}
