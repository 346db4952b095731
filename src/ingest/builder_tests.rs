use super::*;
use crate::ingest::parse_records;
use crate::metric::MetricType;

const LOG: &str = "\
metric,type,start_time,end_time,value,opt
Temperature,int,1000,2000,301
Screen,bool,1000,1500,true
Temperature,int,2000,3000,305
Phone signal strength,int,1000,4000,3
Screen,bool,1500,2500,false
";

fn parse(text: &str) -> Vec<LogRecord> {
    parse_records(text).unwrap()
}

#[test]
fn groups_follow_first_appearance() {
    let log = ingest(&parse(LOG), 0, &IngestOptions::default());
    let names: Vec<&str> = log.name_to_bar_group.names().collect();
    assert_eq!(names, vec!["Temperature", "Screen", "Phone signal strength"]);
}

#[test]
fn each_group_holds_one_named_series() {
    let log = ingest(&parse(LOG), 0, &IngestOptions::default());
    let group = log.name_to_bar_group.get("Temperature").unwrap();
    assert_eq!(group.series.len(), 1);
    assert_eq!(group.series[0].name, "Temperature");
    assert_eq!(group.series[0].metric_type, MetricType::Int);
    assert_eq!(group.series[0].entries.len(), 2);
}

#[test]
fn values_are_normalized() {
    let log = ingest(&parse(LOG), 0, &IngestOptions::default());
    let screen = &log.name_to_bar_group.get("Screen").unwrap().series[0];
    let values: Vec<&str> = screen.entries.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["on", "off"]);

    let signal = &log.name_to_bar_group.get("Phone signal strength").unwrap().series[0];
    assert_eq!(signal.entries[0].value, "good");
}

#[test]
fn reference_time_drops_and_clamps() {
    let log = ingest(&parse(LOG), 1600, &IngestOptions::default());
    assert_eq!(log.reference_ms, 1600);

    let screen = &log.name_to_bar_group.get("Screen").unwrap().series[0];
    assert_eq!(screen.entries, vec![Entry::new(1600, 2500, "off")]);

    let temperature = &log.name_to_bar_group.get("Temperature").unwrap().series[0];
    assert_eq!(temperature.entries[0].start_ms, 1600);
}

#[test]
fn metric_entirely_before_reference_is_absent() {
    let records = parse("Wifi on,bool,0,10,true\nScreen,bool,50,60,true\n");
    let log = ingest(&records, 20, &IngestOptions::default());
    assert!(!log.name_to_bar_group.contains("Wifi on"));
    assert!(log.name_to_bar_group.contains("Screen"));
}

#[test]
fn mismatched_type_is_skipped() {
    let records = parse("Screen,bool,0,10,true\nScreen,string,10,20,dim\n");
    let log = ingest(&records, 0, &IngestOptions::default());
    let screen = &log.name_to_bar_group.get("Screen").unwrap().series[0];
    assert_eq!(screen.entries.len(), 1);
}

#[test]
fn merge_adjacent_folds_continuations() {
    let records = parse(
        "Screen,bool,0,10,true\nScreen,bool,10,20,1\nScreen,bool,25,30,true\nScreen,bool,30,40,false\n",
    );
    let options = IngestOptions {
        merge_adjacent: true,
    };
    let log = ingest(&records, 0, &options);
    let screen = &log.name_to_bar_group.get("Screen").unwrap().series[0];
    assert_eq!(
        screen.entries,
        vec![
            Entry::new(0, 20, "on"),
            Entry::new(25, 30, "on"),
            Entry::new(30, 40, "off"),
        ]
    );
}

#[test]
fn without_merge_entries_are_kept_apart() {
    let records = parse("Screen,bool,0,10,true\nScreen,bool,10,20,true\n");
    let log = ingest(&records, 0, &IngestOptions::default());
    assert_eq!(
        log.name_to_bar_group.get("Screen").unwrap().series[0]
            .entries
            .len(),
        2
    );
}

#[test]
fn opt_column_does_not_affect_entries() {
    let plain = ingest(
        &parse("Screen,bool,0,10,true\nScreen,bool,10,20,false\n"),
        0,
        &IngestOptions::default(),
    );
    let annotated = ingest(
        &parse("Screen,bool,0,10,true,wake\nScreen,bool,10,20,false,sleep\n"),
        0,
        &IngestOptions::default(),
    );
    let spans = |log: &ParsedLog| -> Vec<(i64, i64, String)> {
        log.name_to_bar_group.get("Screen").unwrap().series[0]
            .entries
            .iter()
            .map(|e| (e.start_ms, e.end_ms, e.value.clone()))
            .collect()
    };
    assert_eq!(spans(&plain), spans(&annotated));
}
