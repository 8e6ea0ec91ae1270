use gridml::{
    read_array, read_vector, value_at, write_array, write_vector, Dimensions, Error, Parameters,
};
use xot::Xot;

const AERO_TABLE: &str = r#"
<aeroPerformanceMap>
    <machNumber mapType="vector">0.5;1.2</machNumber>
    <reynoldsNumber mapType="vector">1000000</reynoldsNumber>
    <angleOfYaw mapType="vector">-5;0;5</angleOfYaw>
    <angleOfAttack mapType="vector">1;2;3;4;5;6;7;8</angleOfAttack>
    <cfx mapType="array">
        1;2;3;4;5;6;7;8;
        9;10;11;12;13;14;15;16;
        17;18;19;20;21;22;23;24;
        25;26;27;28;29;30;31;32;
        33;34;35;36;37;38;39;40;
        41;42;43;44;45;46;47;48
    </cfx>
    <cfy mapType="array">
        48;47;46;45;44;43;42;41;
        40;39;38;37;36;35;34;33;
        32;31;30;29;28;27;26;25;
        24;23;22;21;20;19;18;17;
        16;15;14;13;12;11;10;9;
        8;7;6;5;4;3;2;1
    </cfy>
</aeroPerformanceMap>"#;

fn parse(xot: &mut Xot, text: &str) -> xot::Node {
    let doc = xot.parse(text).unwrap();
    xot.document_element(doc).unwrap()
}

#[test]
fn test_full_decode() {
    let mut xot = Xot::new();
    let container = parse(&mut xot, AERO_TABLE);

    let dimensions = Dimensions::new(&xot, container);
    assert_eq!(dimensions.count().unwrap(), 4);
    assert_eq!(
        dimensions.names().unwrap(),
        vec!["machNumber", "reynoldsNumber", "angleOfYaw", "angleOfAttack"]
    );

    let (sizes, product) = dimensions.sizes().unwrap();
    assert_eq!(sizes, vec![2, 1, 3, 8]);
    assert_eq!(product, 48);
    assert_eq!(dimensions.values(2).unwrap(), vec![-5.0, 0.0, 5.0]);

    let parameters = Parameters::new(&xot, container);
    assert_eq!(parameters.count().unwrap(), 2);
    assert_eq!(parameters.names().unwrap(), vec!["cfx", "cfy"]);

    let cfx = read_array(&xot, container, "cfx", product).unwrap();
    assert_eq!(cfx.len(), 48);
    assert_eq!(value_at(&cfx, &sizes, &[0, 0, 0, 0]).unwrap(), 1.0);
    assert_eq!(value_at(&cfx, &sizes, &[1, 0, 2, 7]).unwrap(), 48.0);
    // the last dimension varies fastest
    assert_eq!(value_at(&cfx, &sizes, &[0, 0, 1, 0]).unwrap(), 9.0);
    assert_eq!(value_at(&cfx, &sizes, &[1, 0, 0, 0]).unwrap(), 25.0);

    let cfy = read_array(&xot, container, "cfy", product).unwrap();
    assert_eq!(value_at(&cfy, &sizes, &[0, 0, 0, 0]).unwrap(), 48.0);
    assert_eq!(value_at(&cfy, &sizes, &[1, 0, 2, 7]).unwrap(), 1.0);
}

#[test]
fn test_wrong_expected_size_returns_no_buffer() {
    let mut xot = Xot::new();
    let container = parse(&mut xot, AERO_TABLE);

    for expected in [0, 1, 47, 49] {
        let err = read_array(&xot, container, "cfx", expected).unwrap_err();
        assert!(matches!(err, Error::NonMatchingSize { actual: 48, .. }));
    }
}

#[test]
fn test_encode_decode_round_trip() {
    let mut xot = Xot::new();
    let doc = xot.parse("<aeroPerformanceMap/>").unwrap();
    let container = xot.document_element(doc).unwrap();

    write_vector(&mut xot, container, "machNumber", &[0.5]).unwrap();
    write_vector(&mut xot, container, "angleOfAttack", &[0.0, 2.0, 4.0]).unwrap();

    let sizes = [1, 3];
    let values = vec![0.25, -1.5, 3.0];
    let node = write_array(&mut xot, container, "cmx", &sizes, &values).unwrap();

    // the written payload reads back element-for-element
    assert_eq!(read_array(&xot, container, "cmx", 3).unwrap(), values);
    assert_eq!(read_vector(&xot, xot.first_child(container).unwrap()).unwrap(), vec![0.5]);
    assert_eq!(value_at(&values, &sizes, &[0, 2]).unwrap(), 3.0);

    // and the written node is discoverable through the catalogs
    assert_eq!(Parameters::new(&xot, container).names().unwrap(), vec!["cmx"]);
    assert_eq!(Dimensions::new(&xot, container).sizes().unwrap(), (vec![1, 3], 3));
    assert!(read_vector(&xot, node).is_err());
}

#[test]
fn test_bad_token_fails_every_reader() {
    let mut xot = Xot::new();
    let container = parse(
        &mut xot,
        r#"
        <table>
            <alpha mapType="vector">1;abc;3</alpha>
            <cl mapType="array">1;abc;3</cl>
        </table>"#,
    );

    let dimensions = Dimensions::new(&xot, container);
    assert!(matches!(dimensions.sizes().unwrap_err(), Error::NoNumber(_)));
    assert!(matches!(dimensions.values(0).unwrap_err(), Error::NoNumber(_)));
    assert!(matches!(
        read_array(&xot, container, "cl", 3).unwrap_err(),
        Error::NoNumber(_)
    ));
}

#[test]
fn test_error_display() {
    let mut xot = Xot::new();
    let container = parse(&mut xot, AERO_TABLE);

    insta::assert_snapshot!(
        read_array(&xot, container, "cfz", 48).unwrap_err(),
        @"element not found: cfz"
    );
    insta::assert_snapshot!(
        read_array(&xot, container, "machNumber", 48).unwrap_err(),
        @"attribute mapType not found on element machNumber"
    );
    insta::assert_snapshot!(
        read_array(&xot, container, "cfx", 22).unwrap_err(),
        @"payload has 48 values where 22 were expected"
    );
    insta::assert_snapshot!(
        value_at(&[1.0, 2.0], &[2], &[2]).unwrap_err(),
        @"index out of range: coordinate 2 exceeds size 2 of dimension 0"
    );
}
